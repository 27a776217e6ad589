//! Error types for the API client.
//!
//! # Design
//! `ApiError` is a closed set of five cases. `BadStatus` keeps the raw,
//! unparsed response body; extracting a message from it happens later, in
//! [`crate::resolve`], so nothing is lost when the body is not JSON.

use thiserror::Error;

/// Every way a single request can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The constructed URL is not a valid URL.
    #[error("bad url: {0}")]
    BadUrl(String),

    /// The transport gave up waiting for the server.
    #[error("request timed out")]
    Timeout,

    /// The transport could not establish or complete a connection.
    #[error("network error")]
    NetworkError,

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// A 2xx response body did not decode into the expected shape.
    #[error("bad body: {0}")]
    BadBody(String),
}

/// Failure to pull a human-readable message out of a server error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("error body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("error body matches no known message shape")]
    NoMatchingShape,
}

/// Failure to load a [`crate::Config`] document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}
