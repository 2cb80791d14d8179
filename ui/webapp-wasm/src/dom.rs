//! DOM element bindings.
//!
//! All element references the controller uses, resolved once at startup.
//! The ids are a fixed contract with the page markup; a missing element is
//! a startup error, not something to paper over later.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn get_textarea_value(el: &HtmlTextAreaElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

/// Show or hide a display panel.
pub fn set_visible(el: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    let _ = el.style().set_property("display", value);
}

pub fn focus(el: &HtmlElement) {
    let _ = el.focus();
}

/// Smooth-scroll the page back to the top.
pub fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

// ── Elements struct ──

/// All DOM element references used by the deployment form.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Form fields
    pub token_form: HtmlFormElement,
    pub name_input: HtmlInputElement,
    pub symbol_input: HtmlInputElement,
    pub image_input: HtmlInputElement,
    pub description_input: HtmlTextAreaElement,
    pub market_cap_input: HtmlInputElement,
    pub vesting_percentage_input: HtmlInputElement,
    pub vesting_duration_input: HtmlInputElement,
    pub creator_reward_input: HtmlInputElement,

    // Social rows
    pub social_container: Element,
    pub add_social_btn: HtmlElement,

    // Submission
    pub deploy_btn: HtmlButtonElement,
    pub btn_text: Element,
    pub clear_form_btn: HtmlElement,

    // Panels
    pub deployment_form: HtmlElement,
    pub result_section: HtmlElement,
    pub error_section: HtmlElement,

    // Outcome details
    pub token_address: Element,
    pub basescan_link: HtmlAnchorElement,
    pub error_message: Element,
    pub copy_address_btn: HtmlElement,
    pub deploy_another_btn: HtmlElement,
    pub try_again_btn: HtmlElement,

    // Chrome
    pub toast: Element,
    pub theme_toggle: HtmlElement,
    pub theme_icon: Option<Element>,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_textarea {
    ($id:expr) => {
        by_id_typed::<HtmlTextAreaElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing textarea #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

macro_rules! get_button {
    ($id:expr) => {
        by_id_typed::<HtmlButtonElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing button #{}", $id)))?
    };
}

macro_rules! get_anchor {
    ($id:expr) => {
        by_id_typed::<HtmlAnchorElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing link #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is ready.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            token_form: get_form!("tokenForm"),
            name_input: get_input!("tokenName"),
            symbol_input: get_input!("tokenSymbol"),
            image_input: get_input!("tokenImage"),
            description_input: get_textarea!("tokenDescription"),
            market_cap_input: get_input!("initialMarketCap"),
            vesting_percentage_input: get_input!("vestingPercentage"),
            vesting_duration_input: get_input!("vestingDuration"),
            creator_reward_input: get_input!("creatorReward"),

            social_container: get_el!("socialMediaContainer"),
            add_social_btn: get_html!("addSocialBtn"),

            deploy_btn: get_button!("deployBtn"),
            btn_text: query(".btn-text")
                .ok_or_else(|| JsValue::from_str("missing .btn-text"))?,
            clear_form_btn: get_html!("clearFormBtn"),

            deployment_form: get_html!("deploymentForm"),
            result_section: get_html!("resultSection"),
            error_section: get_html!("errorSection"),

            token_address: get_el!("tokenAddress"),
            basescan_link: get_anchor!("basescanLink"),
            error_message: get_el!("errorMessage"),
            copy_address_btn: get_html!("copyAddressBtn"),
            deploy_another_btn: get_html!("deployAnotherBtn"),
            try_again_btn: get_html!("tryAgainBtn"),

            toast: get_el!("toast"),
            theme_toggle: get_html!("themeToggle"),
            theme_icon: query(".theme-icon"),
        })
    }
}
