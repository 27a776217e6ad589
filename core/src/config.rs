//! Per-API client configuration: a base URL and default headers.
//!
//! # Design
//! The JSON document is `{ "baseUrl": string, "headers": { name: value } }`.
//! Both fields are required. Headers are kept as an ordered list in the
//! document's key order, so they reach the transport exactly as written.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(
        serialize_with = "serialize_headers",
        deserialize_with = "deserialize_headers"
    )]
    pub headers: Vec<(String, String)>,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn serialize_headers<S: Serializer>(headers: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(headers.len()))?;
    for (name, value) in headers {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

fn deserialize_headers<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<(String, String)>, D::Error> {
    deserializer.deserialize_map(HeadersVisitor)
}

struct HeadersVisitor;

impl<'de> Visitor<'de> for HeadersVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of header names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut headers = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            headers.push((name, value));
        }
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_headers_in_document_order() {
        let config = Config::from_json_str(
            r#"{"baseUrl":"https://example.com/api","headers":{"X-Zeta":"1","Authorization":"Bearer t","Accept":"application/json"}}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://example.com/api");
        assert_eq!(
            config.headers,
            vec![
                ("X-Zeta".to_string(), "1".to_string()),
                ("Authorization".to_string(), "Bearer t".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn round_trip_preserves_header_order() {
        let original = Config::new("https://example.com")
            .with_header("b", "2")
            .with_header("a", "1");
        let json = original.to_json_string().unwrap();
        assert_eq!(json, r#"{"baseUrl":"https://example.com","headers":{"b":"2","a":"1"}}"#);
        assert_eq!(Config::from_json_str(&json).unwrap(), original);
    }

    #[test]
    fn missing_headers_is_an_error() {
        let err = Config::from_json_str(r#"{"baseUrl":"https://example.com"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_base_url_is_an_error() {
        assert!(Config::from_json_str(r#"{"headers":{}}"#).is_err());
    }

    #[test]
    fn non_string_header_value_is_an_error() {
        assert!(Config::from_json_str(r#"{"baseUrl":"x","headers":{"X-Retry":3}}"#).is_err());
    }

    #[test]
    fn empty_headers_object_is_allowed() {
        let config = Config::from_json_str(r#"{"baseUrl":"","headers":{}}"#).unwrap();
        assert!(config.headers.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file("/nonexistent/apiwire/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
