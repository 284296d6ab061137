// crates/affirm-core/src/matchers/equality.rs
// ============================================================================
// Module: Affirm Equality Matchers
// Description: Identity and structural equality assertions.
// Purpose: Expose the comparators as assertions with readable failures.
// Dependencies: crate::core, crate::runtime::deep_equal
// ============================================================================

//! ## Overview
//! [`assert_equal`] uses strict identity ([`Value::same_value`]); composites
//! are equal only when they are the same handle. [`assert_deep_equal`] uses
//! [`is_deep_equal`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::failure;
use crate::core::format::render;
use crate::core::issue::AssertResult;
use crate::core::issue::codes;
use crate::core::value::Value;
use crate::runtime::deep_equal::is_deep_equal;

// ============================================================================
// SECTION: Matchers
// ============================================================================

/// Asserts that `received` is identical to `expected`.
///
/// # Errors
///
/// Returns `NOT_EQUAL` when the values are not identical.
pub fn assert_equal(received: &Value, expected: &Value, message: Option<&str>) -> AssertResult {
    if Value::same_value(received, expected) {
        return Ok(());
    }
    Err(failure(
        codes::NOT_EQUAL,
        message,
        format!("Expected {}, but got {}", render(expected), render(received)),
        received,
        expected.clone(),
    ))
}

/// Asserts that `received` is structurally equal to `expected`.
///
/// # Errors
///
/// Returns `NOT_DEEP_EQUAL` when the values differ.
pub fn assert_deep_equal(
    received: &Value,
    expected: &Value,
    message: Option<&str>,
) -> AssertResult {
    if is_deep_equal(received, expected) {
        return Ok(());
    }
    Err(failure(
        codes::NOT_DEEP_EQUAL,
        message,
        format!("Expected deep equal {}, but got {}", render(expected), render(received)),
        received,
        expected.clone(),
    ))
}
