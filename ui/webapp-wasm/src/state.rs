//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The DOM holds the field text; everything else the controller needs to
//! remember lives here.

use slanker_form_core::lifecycle::{Lifecycle, Panel, Phase};
use slanker_form_core::outcome::DeployOutcome;
use slanker_form_core::social::{RowId, SocialRows};
use slanker_form_core::theme::Theme;
use std::cell::RefCell;

/// Central application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub lifecycle: Lifecycle,
    pub social_rows: SocialRows,
    pub theme: Theme,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn phase() -> Phase {
    with_mut(|s| s.lifecycle.phase())
}

pub fn visible_panel() -> Panel {
    with_mut(|s| s.lifecycle.visible_panel())
}

pub fn begin_submit() -> bool {
    with_mut(|s| s.lifecycle.begin_submit())
}

pub fn abort_submit() {
    with_mut(|s| s.lifecycle.abort_submit());
}

pub fn complete_submit(outcome: &DeployOutcome) {
    with_mut(|s| s.lifecycle.complete(outcome));
}

pub fn retry() {
    with_mut(|s| s.lifecycle.retry());
}

pub fn reset_lifecycle() {
    with_mut(|s| s.lifecycle.reset());
}

pub fn add_social_row() -> RowId {
    with_mut(|s| s.social_rows.add())
}

pub fn remove_social_row(id: RowId) -> Option<RowId> {
    with_mut(|s| s.social_rows.remove(id))
}

pub fn reset_social_rows() -> RowId {
    with_mut(|s| s.social_rows.reset())
}

pub fn theme() -> Theme {
    with_mut(|s| s.theme)
}

pub fn set_theme(theme: Theme) {
    with_mut(|s| s.theme = theme);
}

// ── localStorage helpers ──

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn local_get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}
