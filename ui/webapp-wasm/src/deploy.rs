//! Deployment submission flow.
//!
//! Drives the lifecycle: collect, validate, POST once, render the outcome,
//! and support retry / deploy-another / clear-all. Every failure becomes a
//! rendered outcome; the busy state is torn down on every exit path.

use crate::api;
use crate::dom::{self, Elements};
use crate::social;
use crate::state;
use crate::telegram;
use crate::toast;
use gloo_console::error;
use slanker_form_core::form::{self, FieldValues};
use slanker_form_core::lifecycle::Panel;
use slanker_form_core::outcome::{DeployOutcome, NETWORK_ERROR_MESSAGE, interpret_response};
use slanker_form_core::validate::{self, Field, ValidationError};
use web_sys::HtmlInputElement;

const SUBMIT_LABEL: &str = "Generate & Deploy";
const SUBMIT_BUSY_LABEL: &str = "\u{23f3} Deploying...";

enum SubmissionEnd {
    /// Rejected before the network call.
    Invalid(ValidationError),
    /// The network call ran (or failed at the transport) and produced an
    /// outcome to render.
    Done(DeployOutcome),
}

/// Handle a submit trigger (form submit, deploy button, host main button).
pub async fn on_deploy(els: &Elements) {
    if !state::begin_submit() {
        return;
    }

    set_busy(els, true);
    let end = run_submission(els).await;

    match end {
        SubmissionEnd::Invalid(err) => {
            state::abort_submit();
            toast::show(els, &err.to_string(), toast::Kind::Error);
            focus_invalid_field(els, err);
        }
        SubmissionEnd::Done(outcome) => {
            state::complete_submit(&outcome);
            match &outcome {
                DeployOutcome::Success {
                    address,
                    basescan_url,
                } => {
                    dom::set_text(&els.token_address, address);
                    els.basescan_link.set_href(basescan_url);
                    toast::show(
                        els,
                        "Token deployed successfully! \u{1f389}",
                        toast::Kind::Success,
                    );
                }
                DeployOutcome::Failure { message } => {
                    dom::set_text(&els.error_message, message);
                    let notice = if message == NETWORK_ERROR_MESSAGE {
                        "Network error. Please check your connection."
                    } else {
                        "Deployment failed. Please try again."
                    };
                    toast::show(els, notice, toast::Kind::Error);
                }
            }
            sync_panels(els);
            dom::scroll_to_top();
        }
    }

    // Cleanup runs on every path out of the submission.
    set_busy(els, false);
}

async fn run_submission(els: &Elements) -> SubmissionEnd {
    let values = collect_field_values(els);
    let request = form::collect(&values);

    if let Err(err) = validate::validate(&request) {
        return SubmissionEnd::Invalid(err);
    }

    let body = match serde_json::to_string(&request) {
        Ok(body) => body,
        Err(e) => {
            error!("request serialization failed:", e.to_string());
            return SubmissionEnd::Done(DeployOutcome::network_error());
        }
    };

    match api::post_json("/deploy", &body).await {
        Ok((status, text)) => SubmissionEnd::Done(interpret_response(status, &text)),
        Err(e) => {
            error!("deploy request failed:", e);
            SubmissionEnd::Done(DeployOutcome::network_error())
        }
    }
}

fn collect_field_values(els: &Elements) -> FieldValues {
    FieldValues {
        name: dom::get_input_value(&els.name_input),
        symbol: dom::get_input_value(&els.symbol_input),
        image: dom::get_input_value(&els.image_input),
        description: dom::get_textarea_value(&els.description_input),
        initial_market_cap: dom::get_input_value(&els.market_cap_input),
        vesting_percentage: dom::get_input_value(&els.vesting_percentage_input),
        vesting_duration_days: dom::get_input_value(&els.vesting_duration_input),
        creator_reward: dom::get_input_value(&els.creator_reward_input),
        socials: social::collect_values(els),
    }
}

/// Return focus to the input the validation failure points at. For the
/// required-fields check that is the first empty required input.
fn focus_invalid_field(els: &Elements, err: ValidationError) {
    let input: &HtmlInputElement = match err.field() {
        Field::Symbol => &els.symbol_input,
        Field::Image => &els.image_input,
        Field::MarketCap => &els.market_cap_input,
        Field::Name => {
            let required = [
                &els.name_input,
                &els.symbol_input,
                &els.image_input,
                &els.market_cap_input,
            ];
            required
                .into_iter()
                .find(|input| dom::get_input_value(input).trim().is_empty())
                .unwrap_or(&els.name_input)
        }
    };
    dom::focus(input);
}

/// Busy state on the in-page trigger and the host main button.
fn set_busy(els: &Elements, busy: bool) {
    els.deploy_btn.set_disabled(busy);
    if busy {
        dom::add_class(&els.deploy_btn, "loading");
        dom::set_text(&els.btn_text, SUBMIT_BUSY_LABEL);
    } else {
        dom::remove_class(&els.deploy_btn, "loading");
        dom::set_text(&els.btn_text, SUBMIT_LABEL);
    }
    telegram::sync_main_button();
}

/// Make exactly the panel for the current phase visible.
pub fn sync_panels(els: &Elements) {
    let panel = state::visible_panel();
    dom::set_visible(&els.deployment_form, panel == Panel::Form);
    dom::set_visible(&els.result_section, panel == Panel::Success);
    dom::set_visible(&els.error_section, panel == Panel::Error);
}

/// Start a fresh deployment after a success; identity fields are cleared,
/// vesting and reward settings are kept.
pub fn deploy_another(els: &Elements) {
    state::reset_lifecycle();
    sync_panels(els);

    dom::set_input_value(&els.name_input, "");
    dom::set_input_value(&els.symbol_input, "");
    dom::set_input_value(&els.image_input, "");
    els.description_input.set_value("");

    dom::focus(&els.name_input);
    dom::scroll_to_top();
    telegram::sync_main_button();
}

/// Back to the form after a failure, keeping everything the user typed.
pub fn try_again(els: &Elements) {
    state::retry();
    sync_panels(els);
    dom::scroll_to_top();
    telegram::sync_main_button();
}

/// Reset the whole form to defaults after user confirmation.
pub fn clear_form(els: &Elements) {
    let confirmed = dom::window()
        .confirm_with_message("Are you sure you want to clear all form data?")
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    els.token_form.reset();
    social::reset_rows(els);

    dom::set_input_value(
        &els.vesting_percentage_input,
        &form::DEFAULT_VESTING_PERCENTAGE.to_string(),
    );
    dom::set_input_value(
        &els.vesting_duration_input,
        &form::DEFAULT_VESTING_DURATION_DAYS.to_string(),
    );
    dom::set_input_value(
        &els.creator_reward_input,
        &form::DEFAULT_CREATOR_REWARD.to_string(),
    );

    toast::show(els, "Form cleared successfully", toast::Kind::Success);
}
