//! The I/O seam: something that turns an `HttpRequest` into an `Outcome`.
//!
//! # Design
//! The core never opens sockets itself. `Transport` is the single point
//! where a request leaves the process, and every implementation reports
//! exactly one terminal `Outcome` per call with no retries. Dropping the
//! returned future cancels the call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use crate::http::{is_success, HttpMethod, HttpRequest, Metadata, Outcome, RequestBody};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Outcome;
}

/// A [`Transport`] backed by `reqwest`.
///
/// No request timeout is configured unless one is passed to
/// [`ReqwestTransport::with_timeout`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Turn caller headers and body into a reqwest builder. A body's content
    /// type is only added when the caller did not supply one.
    fn prepare(
        &self,
        method: HttpMethod,
        url: Url,
        headers: &[(String, String)],
        body: Option<RequestBody>,
    ) -> Result<reqwest::RequestBuilder, Outcome> {
        let mut builder = self.client.request(to_reqwest_method(method), url);
        for (name, value) in headers {
            let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) else {
                tracing::warn!(header = %name, "header is not valid for HTTP; request not sent");
                return Err(Outcome::NetworkError);
            };
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            if !has_header(headers, &CONTENT_TYPE) {
                builder = builder.header(CONTENT_TYPE, body.content_type);
            }
            builder = builder.body(body.content);
        }
        Ok(builder)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Classify a reqwest failure. Builder errors mean reqwest refused the URL
/// itself (e.g. an unsupported scheme), so they are reported against it.
fn failure_outcome(err: &reqwest::Error, url: &str) -> Outcome {
    if err.is_builder() {
        Outcome::BadUrl(url.to_string())
    } else if err.is_timeout() {
        Outcome::Timeout
    } else {
        Outcome::NetworkError
    }
}

fn has_header(headers: &[(String, String)], name: &HeaderName) -> bool {
    headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name.as_str()))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Outcome {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(_) => return Outcome::BadUrl(url),
        };

        let builder = match self.prepare(method, parsed, &headers, body) {
            Ok(builder) => builder,
            Err(outcome) => return outcome,
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "transport failed before a response arrived");
                return failure_outcome(&e, &url);
            }
        };

        let status = response.status();
        let metadata = Metadata {
            url: response.url().to_string(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers: response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
                .collect(),
        };

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, "transport failed while reading the body");
                return failure_outcome(&e, &url);
            }
        };

        if is_success(metadata.status) {
            Outcome::GoodStatus(metadata, text)
        } else {
            Outcome::BadStatus {
                status: metadata.status,
                body: text,
            }
        }
    }
}
