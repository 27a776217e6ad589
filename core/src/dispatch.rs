//! Issue one request through a [`Transport`] and classify what comes back.
//!
//! Both entry points make exactly one transport call. `request_json` is
//! `request_string` with a JSON decode step as the success handler.

use serde::de::DeserializeOwned;

use crate::classify::{classify, decode_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, Metadata, Outcome, RequestBody};
use crate::transport::Transport;

/// Send a request and hand a 2xx response's metadata and body text to
/// `on_success`.
pub async fn request_string<Tr, T, F>(
    transport: &Tr,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    url: String,
    body: Option<RequestBody>,
    on_success: F,
) -> Result<T, ApiError>
where
    Tr: Transport + ?Sized,
    F: FnOnce(Metadata, String) -> Result<T, ApiError>,
{
    let request = HttpRequest {
        method,
        url,
        headers,
        body,
    };
    send(transport, request, on_success).await
}

/// Send a request and decode a 2xx body as JSON into `T`.
pub async fn request_json<Tr, T>(
    transport: &Tr,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    url: String,
    body: Option<RequestBody>,
) -> Result<T, ApiError>
where
    Tr: Transport + ?Sized,
    T: DeserializeOwned,
{
    request_string(transport, method, headers, url, body, |_, text| decode_json(&text)).await
}

/// Execute a prepared request.
pub async fn send<Tr, T, F>(transport: &Tr, request: HttpRequest, on_success: F) -> Result<T, ApiError>
where
    Tr: Transport + ?Sized,
    F: FnOnce(Metadata, String) -> Result<T, ApiError>,
{
    tracing::debug!(
        method = request.method.as_str(),
        url = %request.url,
        headers = request.headers.len(),
        "dispatching request"
    );
    let outcome = transport.execute(request).await;
    log_outcome(&outcome);
    classify(outcome, on_success)
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::GoodStatus(metadata, _) => tracing::debug!(
            status = metadata.status,
            status_text = %metadata.status_text,
            "request succeeded"
        ),
        Outcome::BadStatus { status, .. } => tracing::debug!(status, "server returned an error status"),
        Outcome::NetworkError => tracing::debug!("network error"),
        Outcome::Timeout => tracing::debug!("request timed out"),
        Outcome::BadUrl(url) => tracing::debug!(%url, "bad url"),
    }
}
