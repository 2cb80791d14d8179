//! Toast notifications.
//!
//! One toast region, one message at a time. A new message replaces the
//! current one and restarts the auto-hide timer; there is no queue.

use crate::dom::{self, Elements};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// How long a toast stays visible.
const AUTO_HIDE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Info,
    Success,
    Error,
}

impl Kind {
    fn class(&self) -> &'static str {
        match self {
            Kind::Info => "info",
            Kind::Success => "success",
            Kind::Error => "error",
        }
    }
}

thread_local! {
    static HIDE_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// Show `message`, replacing whatever is currently displayed.
pub fn show(els: &Elements, message: &str, kind: Kind) {
    let toast = &els.toast;

    for cls in ["show", "info", "success", "error"] {
        dom::remove_class(toast, cls);
    }

    dom::set_text(toast, message);
    dom::add_class(toast, kind.class());
    dom::add_class(toast, "show");

    // Replacing the handle drops (and thereby cancels) the previous timer,
    // so an older toast can no longer hide a newer one early.
    let toast2 = toast.clone();
    let timer = Timeout::new(AUTO_HIDE_MS, move || {
        dom::remove_class(&toast2, "show");
    });
    HIDE_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
}
