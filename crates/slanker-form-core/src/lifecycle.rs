//! Submission lifecycle state machine.
//!
//! `Editing → Submitting → {Success, Failed} → Editing`. Panel visibility is
//! derived from the phase, so exactly one of the three panels is visible
//! after any transition.

use crate::outcome::DeployOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Success,
    Failed,
}

/// Which display panel the current phase maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Form,
    Success,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    pub fn new() -> Lifecycle {
        Lifecycle::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter `Submitting`. Refused while a submission is already in flight,
    /// which makes re-entrant submits impossible even if the disabled
    /// trigger were bypassed.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Leave `Submitting` with the outcome of the network call.
    pub fn complete(&mut self, outcome: &DeployOutcome) {
        self.phase = match outcome {
            DeployOutcome::Success { .. } => Phase::Success,
            DeployOutcome::Failure { .. } => Phase::Failed,
        };
    }

    /// Validation failed or the flow was aborted before the network call.
    pub fn abort_submit(&mut self) {
        self.phase = Phase::Editing;
    }

    /// Retry after a failure; field values are kept by the caller.
    pub fn retry(&mut self) {
        self.phase = Phase::Editing;
    }

    /// Start over for another deployment.
    pub fn reset(&mut self) {
        self.phase = Phase::Editing;
    }

    pub fn visible_panel(&self) -> Panel {
        match self.phase {
            Phase::Editing | Phase::Submitting => Panel::Form,
            Phase::Success => Panel::Success,
            Phase::Failed => Panel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> DeployOutcome {
        DeployOutcome::Success {
            address: "0xAA".to_owned(),
            basescan_url: "https://basescan.org/address/0xAA".to_owned(),
        }
    }

    #[test]
    fn submit_is_not_reentrant() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.begin_submit());
        assert!(!lifecycle.begin_submit());
        lifecycle.complete(&success());
        assert_eq!(lifecycle.phase(), Phase::Success);
    }

    #[test]
    fn failure_routes_to_the_error_panel() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.begin_submit();
        lifecycle.complete(&DeployOutcome::Failure {
            message: "rate limited".to_owned(),
        });
        assert_eq!(lifecycle.phase(), Phase::Failed);
        assert_eq!(lifecycle.visible_panel(), Panel::Error);

        lifecycle.retry();
        assert_eq!(lifecycle.visible_panel(), Panel::Form);
        assert!(lifecycle.begin_submit());
    }

    #[test]
    fn aborted_validation_returns_to_editing() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.begin_submit();
        lifecycle.abort_submit();
        assert_eq!(lifecycle.phase(), Phase::Editing);
        assert!(lifecycle.begin_submit());
    }

    #[test]
    fn exactly_one_panel_is_visible_in_every_phase() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.visible_panel(), Panel::Form);

        lifecycle.begin_submit();
        assert_eq!(lifecycle.visible_panel(), Panel::Form);

        lifecycle.complete(&success());
        assert_eq!(lifecycle.visible_panel(), Panel::Success);

        lifecycle.reset();
        assert_eq!(lifecycle.visible_panel(), Panel::Form);
    }
}
