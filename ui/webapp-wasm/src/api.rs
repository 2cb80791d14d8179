//! HTTP client for the deployment API.
//!
//! Wraps `fetch` for the single JSON POST the app performs. Status and raw
//! body are returned together so `slanker_form_core::outcome` can interpret
//! them without touching the transport.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

const LOCAL_API: &str = "http://localhost:8000";
const PRODUCTION_API: &str = "https://slanker-api.onrender.com";

/// Determine the API base URL: the local development service when the page
/// itself is served from `localhost`, the production endpoint otherwise.
pub fn base_url() -> String {
    let host = dom::window().location().hostname().unwrap_or_default();
    select_base_url(&host).to_owned()
}

fn select_base_url(hostname: &str) -> &'static str {
    if hostname == "localhost" {
        LOCAL_API
    } else {
        PRODUCTION_API
    }
}

/// POST a JSON body, returning the HTTP status and raw response text.
///
/// `Err` means the transport itself failed (unreachable host, aborted
/// request); HTTP-level errors come back as a normal `(status, body)` pair.
pub async fn post_json(path: &str, body: &str) -> Result<(u16, String), String> {
    let url = format!("{}{}", base_url(), path);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("text error: {e:?}"))?;

    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_uses_the_development_endpoint() {
        assert_eq!(select_base_url("localhost"), LOCAL_API);
        assert_eq!(select_base_url("slanker.example"), PRODUCTION_API);
        // Only the literal hostname counts, matching the page contract.
        assert_eq!(select_base_url("127.0.0.1"), PRODUCTION_API);
    }
}
