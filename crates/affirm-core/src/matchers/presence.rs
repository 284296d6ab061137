// crates/affirm-core/src/matchers/presence.rs
// ============================================================================
// Module: Affirm Presence Matchers
// Description: Assertions on absence, `NaN`, and truthiness.
// Purpose: Check the special values that type matchers do not cover.
// Dependencies: crate::core::{issue, value}
// ============================================================================

//! ## Overview
//! Truthiness follows [`Value::is_truthy`]: `false`, `0`, `-0`, `NaN`, `""`,
//! `0n`, `null`, and `undefined` are falsy and everything else is truthy.

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::failure;
use crate::core::issue::AssertResult;
use crate::core::issue::codes;
use crate::core::value::Value;

// ============================================================================
// SECTION: Absence
// ============================================================================

/// Asserts that the value is `null`.
///
/// # Errors
///
/// Returns `NOT_NULL` otherwise.
pub fn assert_null(received: &Value, message: Option<&str>) -> AssertResult {
    match received {
        Value::Null => Ok(()),
        _ => Err(failure(codes::NOT_NULL, message, "Expected value to be null", received, Value::Null)),
    }
}

/// Asserts that the value is `undefined`.
///
/// # Errors
///
/// Returns `NOT_UNDEFINED` otherwise.
pub fn assert_undefined(received: &Value, message: Option<&str>) -> AssertResult {
    match received {
        Value::Undefined => Ok(()),
        _ => Err(failure(
            codes::NOT_UNDEFINED,
            message,
            "Expected value to be undefined",
            received,
            Value::Undefined,
        )),
    }
}

/// Asserts that the value is not `undefined`. `null` is defined.
///
/// # Errors
///
/// Returns `NOT_DEFINED` for `undefined`.
pub fn assert_defined<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Value> {
    match received {
        Value::Undefined => Err(failure(
            codes::NOT_DEFINED,
            message,
            "Expected value to be defined",
            received,
            "defined",
        )),
        _ => Ok(received),
    }
}

/// Asserts that the value is the number `NaN`.
///
/// # Errors
///
/// Returns `NOT_NAN` otherwise.
pub fn assert_nan(received: &Value, message: Option<&str>) -> AssertResult<f64> {
    match received {
        Value::Number(number) if number.is_nan() => Ok(*number),
        _ => Err(failure(codes::NOT_NAN, message, "Expected value to be NaN", received, f64::NAN)),
    }
}

// ============================================================================
// SECTION: Truthiness
// ============================================================================

/// Asserts that the value is truthy.
///
/// # Errors
///
/// Returns `NOT_TRUTHY` for falsy values.
pub fn assert_truthy<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Value> {
    if received.is_truthy() {
        return Ok(received);
    }
    Err(failure(codes::NOT_TRUTHY, message, "Expected value to be truthy", received, "truthy"))
}

/// Asserts that the value is falsy.
///
/// # Errors
///
/// Returns `NOT_FALSY` for truthy values.
pub fn assert_falsy<'a>(received: &'a Value, message: Option<&str>) -> AssertResult<&'a Value> {
    if received.is_truthy() {
        return Err(failure(
            codes::NOT_FALSY,
            message,
            "Expected value to be falsy",
            received,
            "falsy",
        ));
    }
    Ok(received)
}
