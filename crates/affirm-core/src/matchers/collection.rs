// crates/affirm-core/src/matchers/collection.rs
// ============================================================================
// Module: Affirm Collection Matchers
// Description: Containment and exact-length assertions.
// Purpose: Inspect strings, arrays, objects, maps, and sets uniformly.
// Dependencies: crate::core, crate::runtime::combinator
// ============================================================================

//! ## Overview
//! Both matchers first require the received value to be a string, array,
//! object, map, or set through [`any_of`]. Failure codes embed the container
//! label, e.g. `ARRAY_DOES_NOT_CONTAIN` or `NOT_EXACT_STRING_LENGTH`.
//!
//! Containment rules per container:
//! - string: substring search; the needle must be a string.
//! - array: element membership with native equality (`NaN` is found).
//! - object: own key lookup; the key must be a string, number, or symbol.
//! - map: native key membership.
//! - set: native element membership.
//!
//! String lengths count UTF-16 code units.

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::failure;
use super::types::assert_array;
use super::types::assert_map;
use super::types::assert_number;
use super::types::assert_object;
use super::types::assert_set;
use super::types::assert_string;
use super::types::assert_symbol;
use crate::core::format::render;
use crate::core::issue::AssertResult;
use crate::core::issue::AssertionError;
use crate::core::issue::codes;
use crate::core::value::MapValue;
use crate::core::value::SetValue;
use crate::core::value::Value;
use crate::runtime::combinator::Branch;
use crate::runtime::combinator::any_of;

// ============================================================================
// SECTION: Containers
// ============================================================================

/// Borrowed view of a value accepted by the collection matchers.
enum Container<'a> {
    /// String contents.
    String(&'a str),
    /// Array elements.
    Array(&'a [Value]),
    /// Record or class instance.
    Object(&'a Value),
    /// Map entries.
    Map(&'a MapValue),
    /// Set elements.
    Set(&'a SetValue),
}

impl<'a> Container<'a> {
    /// Classifies a value; `None` for unsupported shapes.
    fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::String(text)),
            Value::Array(items) => Some(Self::Array(items)),
            Value::Record(_) | Value::Instance(_) => Some(Self::Object(value)),
            Value::Map(map) => Some(Self::Map(map)),
            Value::Set(set) => Some(Self::Set(set)),
            _ => None,
        }
    }

    /// Returns the label used in codes and messages.
    const fn label(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Map(_) => "map",
            Self::Set(_) => "set",
        }
    }

    /// Returns the length: UTF-16 units, elements, own keys, or entries.
    fn len(&self) -> usize {
        match self {
            Self::String(text) => text.encode_utf16().count(),
            Self::Array(items) => items.len(),
            Self::Object(Value::Record(record)) => record.len(),
            Self::Object(Value::Instance(instance)) => instance.len(),
            Self::Object(_) => 0,
            Self::Map(map) => map.len(),
            Self::Set(set) => set.len(),
        }
    }
}

/// Requires a supported container and returns its view.
fn container(received: &Value) -> AssertResult<Container<'_>> {
    any_of::<AssertionError, _>([
        Branch::check(&|| assert_string(received, None)),
        Branch::check(&|| assert_array(received, None)),
        Branch::check(&|| assert_object(received, None)),
        Branch::check(&|| assert_map(received, None)),
        Branch::check(&|| assert_set(received, None)),
    ])?;
    Container::classify(received).ok_or_else(|| {
        failure(codes::NOT_OBJECT, None, "Expected value to be an object", received, "object")
    })
}

// ============================================================================
// SECTION: Containment
// ============================================================================

/// Asserts that `received` contains `expected`; returns the received value.
///
/// # Errors
///
/// - `NOT_ANY_OF` when `received` is not a supported container, or when an
///   object key is not a string, number, or symbol.
/// - `NOT_STRING` when searching a string for a non-string.
/// - `<LABEL>_DOES_NOT_CONTAIN` when the element or key is missing.
pub fn assert_contain<'a>(
    received: &'a Value,
    expected: &Value,
    message: Option<&str>,
) -> AssertResult<&'a Value> {
    let container = container(received)?;
    let found = match &container {
        Container::String(text) => text.contains(assert_string(expected, None)?),
        Container::Array(items) => items.iter().any(|item| Value::same_value_zero(item, expected)),
        Container::Object(object) => {
            any_of::<AssertionError, _>([
                Branch::check(&|| assert_string(expected, None)),
                Branch::check(&|| assert_number(expected, None)),
                Branch::check(&|| assert_symbol(expected, None)),
            ])?;
            property_key(expected).is_some_and(|key| has_own_key(object, &key))
        }
        Container::Map(map) => map.contains_key(expected),
        Container::Set(set) => set.contains(expected),
    };
    if found {
        return Ok(received);
    }
    let label = container.label();
    Err(failure(
        format!("{}_DOES_NOT_CONTAIN", label.to_uppercase()),
        message,
        format!("Expected {label} to contain {}", render(expected)),
        received,
        expected.clone(),
    ))
}

/// Converts a key to its string property name; symbols have none on records.
fn property_key(key: &Value) -> Option<String> {
    match key {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if *number == 0.0 => Some("0".to_string()),
        Value::Number(_) => Some(render(key)),
        _ => None,
    }
}

/// Returns whether an object has `key` as an own field.
fn has_own_key(object: &Value, key: &str) -> bool {
    match object {
        Value::Record(record) => record.contains_key(key),
        Value::Instance(instance) => instance.contains_key(key),
        _ => false,
    }
}

// ============================================================================
// SECTION: Length
// ============================================================================

/// Asserts that `received` has exactly `expected` elements; returns the received value.
///
/// # Errors
///
/// - `NOT_ANY_OF` when `received` is not a supported container.
/// - `NOT_EXACT_<LABEL>_LENGTH` when the length differs.
pub fn assert_length<'a>(
    received: &'a Value,
    expected: u32,
    message: Option<&str>,
) -> AssertResult<&'a Value> {
    let container = container(received)?;
    if u32::try_from(container.len()).is_ok_and(|len| len == expected) {
        return Ok(received);
    }
    let label = container.label();
    Err(failure(
        format!("NOT_EXACT_{}_LENGTH", label.to_uppercase()),
        message,
        format!("Expected {label} length to be {expected}"),
        received,
        expected,
    ))
}
