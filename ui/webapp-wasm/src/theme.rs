//! Theme application.
//!
//! Dark presentation is `data-theme="dark"` on the document element; light
//! removes the attribute. An explicit toggle persists the choice under
//! `slanker-theme`; the embedding host's colour scheme, when present,
//! overrides the startup presentation without persisting anything.

use crate::dom::{self, Elements};
use crate::state;
use slanker_form_core::theme::{self, Theme};

/// Apply a theme to the document and the toggle indicator.
pub fn apply(els: &Elements, theme: Theme) {
    let root = dom::document().document_element().unwrap();

    match theme {
        Theme::Dark => {
            let _ = root.set_attribute("data-theme", "dark");
        }
        Theme::Light => {
            let _ = root.remove_attribute("data-theme");
        }
    }

    if let Some(icon) = &els.theme_icon {
        dom::set_text(icon, theme.indicator());
    }

    state::set_theme(theme);
}

/// Restore the persisted preference, falling back to the OS signal.
pub fn load(els: &Elements) {
    let saved = state::local_get(theme::STORAGE_KEY);
    let initial = theme::resolve_initial(saved.as_deref(), os_prefers_dark());
    apply(els, initial);
}

/// Flip the presentation and persist the new explicit choice.
pub fn toggle(els: &Elements) {
    let next = state::theme().toggled();
    apply(els, next);
    state::local_set(theme::STORAGE_KEY, next.as_str());
}

/// Apply the embedding host's declared colour scheme, if it names one.
pub fn apply_host_scheme(els: &Elements, scheme: &str) {
    if let Some(theme) = Theme::parse(scheme) {
        apply(els, theme);
    }
}

fn os_prefers_dark() -> bool {
    dom::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}
