// crates/affirm-core/src/core/format.rs
// ============================================================================
// Module: Affirm Value Formatting
// Description: Display rendering and JSON projection for runtime values.
// Purpose: Produce readable failure messages and serializable issue payloads.
// Dependencies: crate::core::{settings, value}, serde, serde_json
// ============================================================================

//! ## Overview
//! [`render`] turns a value into the text shown in failure messages. Strings
//! appear raw, bigints get an `n` suffix, maps and sets list their entries,
//! and everything else falls back to compact JSON via [`to_json`].
//!
//! The JSON projection never fails: values without a JSON form are dropped
//! from records and become `null` inside arrays.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde::Serializer;
use serde_json::Map as JsonMap;
use serde_json::Number;
use serde_json::Value as JsonValue;

use crate::core::settings::Settings;
use crate::core::value::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Marker appended to truncated renderings.
const TRUNCATION_MARKER: char = '…';

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a value for display in failure messages.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::String(text) => text.clone(),
        Value::BigInt(number) => format!("{number}n"),
        Value::Number(number) if number.is_nan() => "NaN".to_string(),
        Value::Number(number) if number.is_infinite() => {
            if number.is_sign_positive() { "Infinity".to_string() } else { "-Infinity".to_string() }
        }
        Value::Symbol(symbol) => symbol.to_string(),
        Value::Function(function) => {
            if function.name().is_empty() {
                "[Function (anonymous)]".to_string()
            } else {
                format!("[Function: {}]", function.name())
            }
        }
        Value::Map(map) => {
            if map.is_empty() {
                return "Map(0) {}".to_string();
            }
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{} => {}", stringify(key), stringify(value)))
                .collect();
            format!("Map({}) {{ {} }}", map.len(), entries.join(", "))
        }
        Value::Set(set) => {
            if set.is_empty() {
                return "Set(0) {}".to_string();
            }
            let items: Vec<String> = set.iter().map(render).collect();
            format!("Set({}) {{ {} }}", set.len(), items.join(", "))
        }
        Value::RegExp(pattern) => pattern.canonical(),
        _ => stringify(value),
    }
}

/// Renders a value, truncating to `settings.max_rendered_chars` characters.
#[must_use]
pub fn render_with(value: &Value, settings: &Settings) -> String {
    truncate(render(value), settings.max_rendered_chars)
}

/// Serializes a value as compact JSON text.
#[must_use]
pub fn stringify(value: &Value) -> String {
    to_json(value).to_string()
}

/// Truncates `text` to `limit` characters, appending a marker when shortened.
fn truncate(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text;
    }
    let mut shortened: String = text.chars().take(limit).collect();
    shortened.push(TRUNCATION_MARKER);
    shortened
}

// ============================================================================
// SECTION: JSON Projection
// ============================================================================

/// Projects a value onto JSON.
///
/// Bigints become `"<digits>n"`, `NaN` becomes `"NaN"`, infinities become
/// `null`, dates become RFC 3339 strings, and patterns, maps, and sets become
/// empty objects.
#[must_use]
pub fn to_json(value: &Value) -> JsonValue {
    json_member(value).unwrap_or(JsonValue::Null)
}

/// Returns the JSON form of a value, or `None` when it has none.
fn json_member(value: &Value) -> Option<JsonValue> {
    match value {
        Value::Undefined | Value::Function(_) | Value::Symbol(_) => None,
        Value::Null => Some(JsonValue::Null),
        Value::Bool(flag) => Some(JsonValue::Bool(*flag)),
        Value::Number(number) => Some(json_number(*number)),
        Value::BigInt(number) => Some(JsonValue::String(format!("{number}n"))),
        Value::String(text) => Some(JsonValue::String(text.clone())),
        Value::Date(date) => Some(date.to_rfc3339().map_or(JsonValue::Null, JsonValue::String)),
        Value::RegExp(_) | Value::Map(_) | Value::Set(_) => Some(JsonValue::Object(JsonMap::new())),
        Value::Array(items) => Some(JsonValue::Array(
            items.iter().map(|item| json_member(item).unwrap_or(JsonValue::Null)).collect(),
        )),
        Value::Record(record) => Some(json_object(record.iter())),
        Value::Instance(instance) => Some(json_object(instance.iter())),
    }
}

/// Converts a number, keeping integral values free of a fractional suffix.
fn json_number(number: f64) -> JsonValue {
    if number.is_nan() {
        return JsonValue::String("NaN".to_string());
    }
    number.to_string().parse::<Number>().map_or(JsonValue::Null, JsonValue::Number)
}

/// Builds a JSON object from fields, skipping members with no JSON form.
fn json_object<'a>(fields: impl Iterator<Item = (&'a str, &'a Value)>) -> JsonValue {
    let mut object = JsonMap::new();
    for (key, value) in fields {
        if let Some(json) = json_member(value) {
            object.insert(key.to_string(), json);
        }
    }
    JsonValue::Object(object)
}

// ============================================================================
// SECTION: Trait Implementations
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_json(self).serialize(serializer)
    }
}
