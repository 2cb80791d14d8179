//! Clipboard copy with legacy fallback.
//!
//! The async clipboard API is missing in insecure contexts and may be
//! denied; in both cases an offscreen textarea plus `execCommand("copy")`
//! is tried before giving up. The copied element flashes briefly on
//! success.

use crate::dom::{self, Elements};
use crate::toast;
use gloo_console::warn;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlTextAreaElement};

const FLASH_MS: u32 = 500;

thread_local! {
    static FLASH_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// Copy an element's text content, notifying either way.
pub async fn copy_element_text(els: &Elements, source: &Element) {
    let text = source.text_content().unwrap_or_default();

    if write_clipboard(&text).await {
        toast::show(els, "Copied to clipboard! \u{1f4cb}", toast::Kind::Success);
        flash(source);
        return;
    }

    warn!("async clipboard write failed, falling back to execCommand");
    if legacy_copy(&text) {
        toast::show(els, "Copied to clipboard! \u{1f4cb}", toast::Kind::Success);
        flash(source);
    } else {
        toast::show(
            els,
            "Failed to copy. Please copy manually.",
            toast::Kind::Error,
        );
    }
}

async fn write_clipboard(text: &str) -> bool {
    let navigator = dom::window().navigator();
    // No clipboard object outside secure contexts.
    let probe = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"));
    match probe {
        Ok(value) if !value.is_undefined() && !value.is_null() => {
            JsFuture::from(navigator.clipboard().write_text(text))
                .await
                .is_ok()
        }
        _ => false,
    }
}

fn legacy_copy(text: &str) -> bool {
    let document = dom::document();
    let Some(body) = document.body() else {
        return false;
    };

    let textarea: HtmlTextAreaElement = match dom::create_element("textarea").dyn_into() {
        Ok(el) => el,
        Err(_) => return false,
    };
    textarea.set_value(text);
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();

    let copied = document
        .unchecked_ref::<web_sys::HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}

/// Brief success-coloured highlight on the copied element.
fn flash(source: &Element) {
    let style = source.unchecked_ref::<web_sys::HtmlElement>().style();
    let _ = style.set_property("background", "var(--success-color)");
    let _ = style.set_property("color", "white");

    let source2 = source.clone();
    let timer = Timeout::new(FLASH_MS, move || {
        let style = source2.unchecked_ref::<web_sys::HtmlElement>().style();
        let _ = style.remove_property("background");
        let _ = style.remove_property("color");
    });
    FLASH_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
}
