//! Event binding.
//!
//! Wires all UI event listeners once at startup. To add new events, add
//! closures here and (if async) spawn via `wasm_bindgen_futures::spawn_local`.

use crate::clipboard;
use crate::deploy;
use crate::dom::{self, Elements};
use crate::social;
use crate::theme;
use crate::toast;
use slanker_form_core::form;
use slanker_form_core::validate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            $handler(&els);
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Form submission ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                deploy::on_deploy(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.token_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Outcome panels ──
    on_click!(els.deploy_another_btn, els, deploy::deploy_another);
    on_click!(els.try_again_btn, els, deploy::try_again);
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let source = els3.token_address.clone();
                clipboard::copy_element_text(&els3, &source).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.copy_address_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Form chrome ──
    on_click!(els.theme_toggle, els, theme::toggle);
    on_click!(els.add_social_btn, els, social::add_row);
    on_click!(els.clear_form_btn, els, deploy::clear_form);

    // ── Live field validation ──
    bind_symbol_filter(els);
    bind_image_blur_check(els);
    bind_number_clamping();

    // ── Page-level hooks ──
    bind_network_status(els);
    bind_error_hook(els);
}

/// Uppercase and strip non-letters from the symbol as it is typed.
fn bind_symbol_filter(els: &Elements) {
    let symbol = els.symbol_input.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let raw = symbol.value();
        let filtered = form::filter_symbol_input(&raw);
        if filtered != raw {
            symbol.set_value(&filtered);
        }
    }) as Box<dyn FnMut(_)>);
    els.symbol_input
        .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Flag a non-IPFS image URL as soon as the field loses focus.
fn bind_image_blur_check(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let value = els2.image_input.value();
        let value = value.trim();
        if !value.is_empty() && !value.starts_with(validate::IMAGE_SCHEME) {
            toast::show(
                &els2,
                &validate::ValidationError::ImageScheme.to_string(),
                toast::Kind::Error,
            );
            dom::focus(&els2.image_input);
        }
    }) as Box<dyn FnMut(_)>);
    els.image_input
        .add_event_listener_with_callback("blur", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Clamp every numeric input to its declared min/max while editing.
fn bind_number_clamping() {
    for el in dom::query_all("input[type=\"number\"]") {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let input2 = input.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let Ok(value) = input2.value().parse::<f64>() else {
                return;
            };
            let min = input2.min().parse::<f64>().ok();
            let max = input2.max().parse::<f64>().ok();
            let clamped = form::clamp_to_range(value, min, max);
            if clamped != value {
                input2.set_value(&clamped.to_string());
            }
        }) as Box<dyn FnMut(_)>);
        input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Connection status toasts.
fn bind_network_status(els: &Elements) {
    let window = dom::window();

    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        toast::show(&els2, "Connection restored \u{2705}", toast::Kind::Success);
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("online", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        toast::show(
            &els2,
            "Connection lost. Please check your network.",
            toast::Kind::Error,
        );
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("offline", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

/// Last-resort handler for errors that escape everything else.
fn bind_error_hook(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        toast::show(
            &els2,
            "An unexpected error occurred. Please refresh and try again.",
            toast::Kind::Error,
        );
    }) as Box<dyn FnMut(_)>);
    dom::window()
        .add_event_listener_with_callback("error", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
