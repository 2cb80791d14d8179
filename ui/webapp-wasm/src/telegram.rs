//! Telegram mini-app host bridge.
//!
//! The page may be embedded in Telegram's WebApp container. The host object
//! is probed once per call through `Reflect`, so every operation here is a
//! no-op in a plain browser. The main button carries a single persistent
//! click handler that dispatches on the lifecycle phase instead of
//! re-registering a new handler per outcome (`onClick` accumulates
//! handlers on the Telegram side).

use crate::dom::Elements;
use crate::state;
use crate::theme;
use gloo_console::log;
use slanker_form_core::lifecycle::Phase;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const DEPLOY_LABEL: &str = "\u{1f3af} Deploy Token";
pub const BUSY_LABEL: &str = "\u{23f3} Deploying...";
pub const DEPLOY_ANOTHER_LABEL: &str = "\u{1f680} Deploy Another";

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`.
    pub type WebApp;

    #[wasm_bindgen(method)]
    fn ready(this: &WebApp);

    #[wasm_bindgen(method, getter, js_name = colorScheme)]
    fn color_scheme(this: &WebApp) -> String;

    #[wasm_bindgen(method, js_name = enableClosingConfirmation)]
    fn enable_closing_confirmation(this: &WebApp);

    #[wasm_bindgen(method, getter, js_name = MainButton)]
    fn main_button(this: &WebApp) -> MainButton;

    pub type MainButton;

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &MainButton, text: &str);

    #[wasm_bindgen(method, js_name = onClick)]
    fn on_click(this: &MainButton, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = showProgress)]
    fn show_progress(this: &MainButton);

    #[wasm_bindgen(method, js_name = hideProgress)]
    fn hide_progress(this: &MainButton);
}

/// The embedding host, when the page runs inside Telegram.
pub fn host() -> Option<WebApp> {
    let window = crate::dom::window();
    let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if web_app.is_undefined() || web_app.is_null() {
        return None;
    }
    Some(web_app.unchecked_into())
}

/// Wire the host integration at startup. No-op without a host.
pub fn setup(els: &Elements) {
    let Some(app) = host() else {
        return;
    };

    app.ready();
    theme::apply_host_scheme(els, &app.color_scheme());

    let button = app.main_button();
    button.set_text(DEPLOY_LABEL);

    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move || {
        let els3 = els2.clone();
        match state::phase() {
            Phase::Success => crate::deploy::deploy_another(&els3),
            Phase::Submitting => {}
            Phase::Editing | Phase::Failed => {
                wasm_bindgen_futures::spawn_local(async move {
                    crate::deploy::on_deploy(&els3).await;
                });
            }
        }
    }) as Box<dyn FnMut()>);
    button.on_click(cb.as_ref().unchecked_ref());
    cb.forget();

    app.enable_closing_confirmation();

    log!("telegram webapp host detected");
}

/// Reflect the current lifecycle phase on the host's main button.
/// No-op without a host.
pub fn sync_main_button() {
    let Some(app) = host() else {
        return;
    };

    let button = app.main_button();
    match state::phase() {
        Phase::Submitting => {
            button.set_text(BUSY_LABEL);
            button.show_progress();
        }
        Phase::Success => {
            button.set_text(DEPLOY_ANOTHER_LABEL);
            button.hide_progress();
        }
        Phase::Editing | Phase::Failed => {
            button.set_text(DEPLOY_LABEL);
            button.hide_progress();
        }
    }
}
