//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and their terminal outcomes as plain
//! data. The core builds `HttpRequest` values and classifies `Outcome` values;
//! whatever implements [`crate::Transport`] performs the actual I/O.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! task and thread boundaries without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// The verb string handed to the transport.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A request body together with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub content_type: String,
    pub content: String,
}

impl RequestBody {
    /// Wrap an already-encoded JSON value as an `application/json` body.
    pub fn json(value: &serde_json::Value) -> Self {
        Self {
            content_type: "application/json".to_string(),
            content: value.to_string(),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Headers and body are handed to the transport verbatim; nothing in the
/// core rewrites, deduplicates or reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

/// Response metadata for a completed request with a success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub url: String,
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
}

/// The terminal result of one transport call, prior to any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered with a 2xx status.
    GoodStatus(Metadata, String),
    /// The server answered with a status outside the 2xx range.
    BadStatus { status: u16, body: String },
    NetworkError,
    Timeout,
    /// The request URL could not be parsed; carries the offending URL.
    BadUrl(String),
}

/// Whether `status` lies in the success range.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_verbs() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn json_body_sets_content_type() {
        let body = RequestBody::json(&serde_json::json!({"title": "x"}));
        assert_eq!(body.content_type, "application/json");
        assert_eq!(body.content, r#"{"title":"x"}"#);
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(404));
    }
}
