//! Deployment response interpretation.
//!
//! The pure half of the network call: maps an HTTP status plus raw body to
//! the outcome the UI renders. The transport itself lives in the wasm crate.

use slanker_api_types::{DeployErrorBody, DeployResponse};

/// Generic message for transport-level failures and unreadable bodies.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or API unavailable";
/// Fallback when the service reports failure without a reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "Deployment failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Success {
        address: String,
        basescan_url: String,
    },
    Failure {
        message: String,
    },
}

impl DeployOutcome {
    pub fn network_error() -> DeployOutcome {
        DeployOutcome::Failure {
            message: NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Interpret a `/deploy` response.
///
/// Non-2xx statuses surface the JSON `detail` when the body carries one,
/// falling back to a plain `HTTP error: <status>`. A 2xx body that does not
/// parse is treated like a transport failure. A parsed body reporting
/// `success: false` uses the service's `error` string when given.
pub fn interpret_response(status: u16, body: &str) -> DeployOutcome {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<DeployErrorBody>(body)
            .ok()
            .and_then(|e| e.detail)
            .filter(|d| !d.is_empty());
        return DeployOutcome::Failure {
            message: detail.unwrap_or_else(|| format!("HTTP error: {status}")),
        };
    }

    let Ok(response) = serde_json::from_str::<DeployResponse>(body) else {
        return DeployOutcome::network_error();
    };

    if response.success {
        DeployOutcome::Success {
            address: response.address,
            basescan_url: response.basescan_url,
        }
    } else {
        DeployOutcome::Failure {
            message: response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_yields_address_and_link() {
        let outcome = interpret_response(
            200,
            r#"{"success":true,"address":"0xAA","basescanUrl":"https://basescan.org/address/0xAA"}"#,
        );
        assert_eq!(
            outcome,
            DeployOutcome::Success {
                address: "0xAA".to_owned(),
                basescan_url: "https://basescan.org/address/0xAA".to_owned(),
            }
        );
    }

    #[test]
    fn http_error_detail_is_surfaced() {
        let outcome = interpret_response(500, r#"{"detail":"rate limited"}"#);
        assert_eq!(
            outcome,
            DeployOutcome::Failure {
                message: "rate limited".to_owned()
            }
        );
    }

    #[test]
    fn http_error_without_detail_falls_back_to_status() {
        for body in ["", "not json", "{}"] {
            let outcome = interpret_response(502, body);
            assert_eq!(
                outcome,
                DeployOutcome::Failure {
                    message: "HTTP error: 502".to_owned()
                },
                "body {body:?}"
            );
        }
    }

    #[test]
    fn reported_failure_uses_the_service_error() {
        let outcome = interpret_response(200, r#"{"success":false,"error":"symbol taken"}"#);
        assert_eq!(
            outcome,
            DeployOutcome::Failure {
                message: "symbol taken".to_owned()
            }
        );
    }

    #[test]
    fn reported_failure_without_error_uses_the_generic_message() {
        let outcome = interpret_response(200, r#"{"success":false}"#);
        assert_eq!(
            outcome,
            DeployOutcome::Failure {
                message: GENERIC_FAILURE_MESSAGE.to_owned()
            }
        );
    }

    #[test]
    fn unreadable_success_body_counts_as_network_error() {
        let outcome = interpret_response(200, "<!doctype html>");
        assert_eq!(outcome, DeployOutcome::network_error());
    }
}
