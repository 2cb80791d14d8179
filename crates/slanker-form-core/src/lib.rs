//! Slanker form controller core.
//!
//! The deployment form's state and rules, kept free of DOM and network so
//! they can be exercised natively. The wasm frontend in `ui/webapp-wasm`
//! reads inputs, hands them to this crate, and renders what comes back.

pub mod form;
pub mod lifecycle;
pub mod outcome;
pub mod scrub;
pub mod social;
pub mod theme;
pub mod validate;
