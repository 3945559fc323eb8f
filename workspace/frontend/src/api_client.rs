pub mod chain;
pub mod product;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_sys::AbortController;

use crate::settings;

/// Common GET request handler.
///
/// The ledger API returns bare JSON documents, so the body is decoded
/// directly into `T`. Requests are aborted after the configured timeout.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let settings = settings::get_settings();
    let url = settings.api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let controller = AbortController::new().map_err(|e| {
        let error_msg = format!("Failed to create abort controller: {:?}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;
    let signal = controller.signal();

    // dropping the handle cancels the timer once the request settles
    let _timeout = (settings.request_timeout_ms > 0).then(|| {
        let endpoint = endpoint.to_string();
        Timeout::new(settings.request_timeout_ms, move || {
            log::warn!("GET {} - Timed out, aborting", endpoint);
            controller.abort();
        })
    });

    let response = Request::get(&url)
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
