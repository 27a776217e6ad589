//! Pull a human-readable message out of a server error body.
//!
//! # Design
//! Servers disagree on field casing (`Message` vs `message`) and on whether
//! they send one string or a list. The body is parsed once and then handed
//! to an ordered list of shape readers; the first one that finds its shape
//! wins. A reader only falls through when its field is absent or has the wrong
//! type. An empty string or empty list is a match.
//!
//! Singular string fields are checked before list fields so a lone string
//! is never mistaken for a one-element list.

use serde_json::{Map, Value};

use crate::error::ExtractError;
use crate::localize::Localize;

/// String fields, in lookup order. The value is returned verbatim.
const STRING_FIELDS: [&str; 4] = ["ExceptionMessage", "exceptionMessage", "Message", "message"];

/// List-of-string fields, in lookup order. Each entry is localized.
const LIST_FIELDS: [&str; 4] = ["ExceptionMessage", "exceptionMessage", "Messages", "messages"];

type ShapeReader = fn(&Map<String, Value>, &dyn Localize) -> Option<String>;

const READERS: [ShapeReader; 2] = [read_string_fields, read_list_fields];

/// Extract the best message from `body`.
///
/// Fails when `body` is not JSON, is not an object, or carries none of the
/// known message fields. Callers substitute their own default in that case.
pub fn extract_server_message(body: &str, localize: &dyn Localize) -> Result<String, ExtractError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;
    let object = value.as_object().ok_or(ExtractError::NoMatchingShape)?;

    READERS
        .iter()
        .find_map(|read| read(object, localize))
        .ok_or(ExtractError::NoMatchingShape)
}

fn read_string_fields(object: &Map<String, Value>, _: &dyn Localize) -> Option<String> {
    STRING_FIELDS
        .iter()
        .find_map(|name| object.get(*name).and_then(Value::as_str))
        .map(str::to_string)
}

fn read_list_fields(object: &Map<String, Value>, localize: &dyn Localize) -> Option<String> {
    let messages = LIST_FIELDS
        .iter()
        .find_map(|name| object.get(*name).and_then(string_list))?;

    // Every entry is followed by a space, including the last one.
    let mut joined = String::new();
    for message in messages {
        joined.push_str(&localize.localize(message, message));
        joined.push(' ');
    }
    Some(joined)
}

/// The value as a list of strings, or `None` if it is not an array or any
/// element is not a string.
fn string_list(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}
