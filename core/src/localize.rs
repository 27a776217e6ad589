//! Localization lookup: `(key, default) -> text`.
//!
//! # Design
//! The lookup is injected wherever a message is produced rather than read
//! from global state. Implementations must never fail; when a key is
//! unknown they return `default` unchanged, even when it is empty.

use std::collections::HashMap;

use serde::Deserialize;

/// Resolve a localization key to display text.
pub trait Localize {
    fn localize(&self, key: &str, default: &str) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str, &str) -> String,
{
    fn localize(&self, key: &str, default: &str) -> String {
        self(key, default)
    }
}

/// A lookup with no entries: always answers with the default text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Localize for NoTranslations {
    fn localize(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

/// An in-memory catalog decoded from a flat JSON object of key/text pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K, V> FromIterator<(K, V)> for Translations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl Localize for Translations {
    fn localize(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .map_or_else(|| default.to_string(), String::clone)
    }
}
