//! Client-side HTTP helpers for REST-style JSON APIs.
//!
//! # Overview
//! Builds requests, hands them to a [`Transport`], and reduces whatever comes
//! back to `Result<T, ApiError>`. Failures can then be turned into a single
//! localized, user-facing string with [`resolve_error_message`], which digs
//! server-supplied messages out of error bodies of several shapes.
//!
//! # Design
//! - [`ApiError`] is a closed set of five cases; `BadStatus` keeps the raw
//!   body and parsing is deferred until a message is needed.
//! - Classification ([`classify`]) and message extraction
//!   ([`extract_server_message`]) are pure functions with no I/O.
//! - Localization is injected through the [`Localize`] trait, never read
//!   from global state.
//! - [`ApiClient`] is stateless: it holds a [`Config`] and a transport. Each
//!   verb has a pure `build_*` method and an async sender.

pub mod classify;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod http;
pub mod localize;
pub mod resolve;
pub mod transport;
pub mod url_builder;

pub use classify::{classify, decode_json, decode_null};
pub use client::ApiClient;
pub use config::Config;
pub use dispatch::{request_json, request_string, send};
pub use error::{ApiError, ConfigError, ExtractError};
pub use extract::extract_server_message;
pub use http::{HttpMethod, HttpRequest, Metadata, Outcome, RequestBody};
pub use localize::{Localize, NoTranslations, Translations};
pub use resolve::resolve_error_message;
pub use transport::{ReqwestTransport, Transport};
pub use url_builder::build_url;
