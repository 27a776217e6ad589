//! Reduce a transport [`Outcome`] to `Result<T, ApiError>`.
//!
//! # Design
//! Classification is a total, pure function. The success handler runs only
//! for 2xx outcomes; every other outcome maps to exactly one `ApiError`
//! variant without looking at the body.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{Metadata, Outcome};

/// Map `outcome` to a result, delegating 2xx bodies to `on_success`.
pub fn classify<T, F>(outcome: Outcome, on_success: F) -> Result<T, ApiError>
where
    F: FnOnce(Metadata, String) -> Result<T, ApiError>,
{
    match outcome {
        Outcome::GoodStatus(metadata, body) => on_success(metadata, body),
        Outcome::BadStatus { status, body } => Err(ApiError::BadStatus { status, body }),
        Outcome::NetworkError => Err(ApiError::NetworkError),
        Outcome::Timeout => Err(ApiError::Timeout),
        Outcome::BadUrl(url) => Err(ApiError::BadUrl(url)),
    }
}

/// Decode a 2xx body as JSON into `T`; failures become `BadBody`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "response body did not match expected shape");
        ApiError::BadBody(e.to_string())
    })
}

/// Accept exactly the JSON literal `null`.
pub fn decode_null(body: &str) -> Result<(), ApiError> {
    decode_json::<()>(body)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    fn metadata() -> Metadata {
        Metadata {
            url: "http://localhost/items".to_string(),
            status: 200,
            status_text: "OK".to_string(),
            headers: Vec::new(),
        }
    }

    fn classify_json(outcome: Outcome) -> Result<Item, ApiError> {
        classify(outcome, |_, body| decode_json(&body))
    }

    #[test]
    fn good_status_with_valid_body_is_ok() {
        let item = classify_json(Outcome::GoodStatus(metadata(), r#"{"name":"a"}"#.to_string())).unwrap();
        assert_eq!(item, Item { name: "a".to_string() });
    }

    #[test]
    fn good_status_with_wrong_shape_is_bad_body() {
        let err = classify_json(Outcome::GoodStatus(metadata(), r#"{"title":"a"}"#.to_string())).unwrap_err();
        match err {
            ApiError::BadBody(msg) => assert!(msg.contains("name"), "diagnostic should name the field: {msg}"),
            other => panic!("expected BadBody, got {other:?}"),
        }
    }

    #[test]
    fn bad_status_keeps_raw_body() {
        let err = classify_json(Outcome::BadStatus {
            status: 500,
            body: "not json at all".to_string(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::BadStatus {
                status: 500,
                body: "not json at all".to_string()
            }
        );
    }

    #[test]
    fn transport_failures_map_one_to_one() {
        assert_eq!(classify_json(Outcome::NetworkError).unwrap_err(), ApiError::NetworkError);
        assert_eq!(classify_json(Outcome::Timeout).unwrap_err(), ApiError::Timeout);
        assert_eq!(
            classify_json(Outcome::BadUrl("ht tp://x".to_string())).unwrap_err(),
            ApiError::BadUrl("ht tp://x".to_string())
        );
    }

    #[test]
    fn success_handler_only_runs_for_good_status() {
        let mut calls = 0;
        let _ = classify(Outcome::Timeout, |_, _| {
            calls += 1;
            Ok(())
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn success_handler_receives_metadata() {
        let status = classify(Outcome::GoodStatus(metadata(), String::new()), |m, _| Ok(m.status)).unwrap();
        assert_eq!(status, 200);
    }

    #[test]
    fn null_rule_accepts_only_null() {
        assert!(decode_null("null").is_ok());
        assert!(decode_null(" null ").is_ok());
        for body in ["{}", "[]", "0", "\"\"", "false", ""] {
            assert!(
                matches!(decode_null(body), Err(ApiError::BadBody(_))),
                "{body:?} should be rejected"
            );
        }
    }
}
