//! Turn any [`ApiError`] into a ready-to-display, localized string.

use crate::error::ApiError;
use crate::extract::extract_server_message;
use crate::localize::Localize;

pub const TIMEOUT_KEY: &str = "NetworkTimeout";
pub const NETWORK_ERROR_KEY: &str = "NetworkError";
pub const SERVER_ERROR_KEY: &str = "Server.Error";

pub const DEFAULT_TIMEOUT_MESSAGE: &str =
    "The server took too long to respond. Please check your connection and try again.";
pub const DEFAULT_NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the server. Please check your internet connection and try again.";
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str =
    "Something went wrong on the server. Please try again later.";

/// Resolve `error` to a user-facing message.
///
/// `BadUrl` and `BadBody` diagnostics are returned verbatim. For
/// `BadStatus` the body is searched for a server-supplied message; if none
/// is found the generic server error text is used. The status code is never
/// interpolated.
pub fn resolve_error_message(error: &ApiError, localize: &dyn Localize) -> String {
    match error {
        ApiError::BadUrl(url) => url.clone(),
        ApiError::Timeout => localize.localize(TIMEOUT_KEY, DEFAULT_TIMEOUT_MESSAGE),
        ApiError::NetworkError => localize.localize(NETWORK_ERROR_KEY, DEFAULT_NETWORK_ERROR_MESSAGE),
        ApiError::BadBody(msg) => msg.clone(),
        ApiError::BadStatus { status, body } => match extract_server_message(body, localize) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(status, error = %e, "no server message in error body");
                localize.localize(SERVER_ERROR_KEY, DEFAULT_SERVER_ERROR_MESSAGE)
            }
        },
    }
}

impl ApiError {
    /// Shorthand for [`resolve_error_message`].
    pub fn user_message(&self, localize: &dyn Localize) -> String {
        resolve_error_message(self, localize)
    }
}
