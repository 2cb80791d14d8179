//! Best-effort scrubbing of sensitive inputs.
//!
//! When the page hides or unloads, password-like and key-named fields are
//! overwritten several times with random content and cleared. The platform
//! may still retain earlier copies; this only narrows the window.

use crate::dom;
use slanker_form_core::scrub;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

/// Overwrite and clear every sensitive input and textarea on the page.
pub fn scrub_sensitive_fields() {
    for el in dom::query_all("input, textarea") {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            if scrub::is_sensitive(&input.type_(), &input.name()) {
                overwrite(|v| input.set_value(v));
            }
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            if scrub::is_sensitive("textarea", &area.name()) {
                overwrite(|v| area.set_value(v));
            }
        }
    }
}

fn overwrite(set_value: impl Fn(&str)) {
    for _ in 0..scrub::OVERWRITE_PASSES {
        let mut filler = random_filler();
        set_value(&filler);
        scrub::wipe(&mut filler);
    }
    set_value("");
}

/// Short random string, one per overwrite pass.
fn random_filler() -> String {
    js_sys::Number::from(js_sys::Math::random())
        .to_string(36)
        .map(String::from)
        .unwrap_or_default()
}

/// Scrub on page hide and unload.
pub fn bind() {
    let window = dom::window();
    let document = dom::document();

    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        scrub_sensitive_fields();
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("beforeunload", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let document2 = document.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if document2.hidden() {
            scrub_sensitive_fields();
        }
    }) as Box<dyn FnMut(_)>);
    document
        .add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
