//! Slanker WebApp Frontend
//!
//! Pure Rust + WASM form controller for the token-deployment page.
//! Modularised for extensibility: each concern lives in its own module;
//! the form rules themselves come from `slanker-form-core`.

pub mod api;
pub mod clipboard;
pub mod deploy;
pub mod dom;
pub mod events;
pub mod scrub;
pub mod social;
pub mod state;
pub mod telegram;
pub mod theme;
pub mod toast;

use gloo_console::log;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Presentation first, so nothing renders in the wrong theme
    theme::load(&els);

    // The social list starts with one empty row
    social::add_row(&els);

    // Editing phase: form visible, outcome panels hidden
    deploy::sync_panels(&els);

    events::bind_events(&els);
    scrub::bind();

    // Host integration last: its colour scheme overrides the stored one
    telegram::setup(&els);

    log!("slanker webapp initialized");
    Ok(())
}
