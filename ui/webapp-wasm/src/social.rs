//! Social-media row rendering.
//!
//! Rows are created from the id list in [`SocialRows`] and rendered into
//! `#socialMediaContainer`; the inputs themselves hold the text until
//! collection. Removing the last row re-renders the replacement the core
//! hands back, so the container never ends up empty.

use crate::dom::{self, Elements};
use crate::state;
use slanker_api_types::SocialPlatform;
use slanker_form_core::social::{RowId, SocialRows};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};

/// Append a new empty row.
pub fn add_row(els: &Elements) {
    let id = state::add_social_row();
    append_row_element(els, id);
}

/// Remove the row with `id`, re-adding a fresh one when it was the last.
pub fn remove_row(els: &Elements, id: RowId) {
    if let Some(row) = dom::by_id(&SocialRows::dom_id(id)) {
        row.remove();
    }
    if let Some(replacement) = state::remove_social_row(id) {
        append_row_element(els, replacement);
    }
}

/// Collapse the list back to a single empty row.
pub fn reset_rows(els: &Elements) {
    dom::set_inner_html(&els.social_container, "");
    let id = state::reset_social_rows();
    append_row_element(els, id);
}

/// Read `(platform, url)` values from the rendered rows, in order.
pub fn collect_values(els: &Elements) -> Vec<(String, String)> {
    dom::query_all_within(&els.social_container, ".social-media-row")
        .iter()
        .map(|row| {
            let platform = dom::query_within(row, "select[name=\"socialPlatform\"]")
                .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
                .map(|sel| sel.value())
                .unwrap_or_default();
            let url = dom::query_within(row, "input[name=\"socialUrl\"]")
                .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            (platform, url)
        })
        .collect()
}

fn append_row_element(els: &Elements, id: RowId) {
    let row = dom::create_element("div");
    let _ = row.set_attribute("class", "social-media-row");
    let _ = row.set_attribute("id", &SocialRows::dom_id(id));

    let mut options = String::from(r#"<option value="">Platform</option>"#);
    for platform in SocialPlatform::ALL {
        options.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            platform.as_str(),
            platform.label(),
        ));
    }

    let html = format!(
        r#"
        <select class="form-select" name="socialPlatform">{options}</select>
        <input
            type="url"
            class="form-input"
            name="socialUrl"
            placeholder="https://example.com/yourprofile"
        />
        <button type="button" class="remove-social-btn" title="Remove">&#x274c;</button>
        "#
    );
    dom::set_inner_html(&row, &html);
    els.social_container.append_child(&row).unwrap();

    // Wire the remove button of this row
    if let Some(btn) = dom::query_within(&row, ".remove-social-btn") {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            remove_row(&els2, id);
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}
