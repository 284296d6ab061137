// crates/affirm-core/src/matchers/pattern.rs
// ============================================================================
// Module: Affirm Pattern Matcher
// Description: Regular-expression match assertion.
// Purpose: Check string contents against a compiled pattern.
// Dependencies: crate::core::{issue, value}
// ============================================================================

//! ## Overview
//! [`assert_match`] searches anywhere in the string; anchor the pattern to
//! require a full match.

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::failure;
use super::types::assert_string;
use crate::core::issue::AssertResult;
use crate::core::issue::codes;
use crate::core::value::Pattern;
use crate::core::value::Value;

// ============================================================================
// SECTION: Matcher
// ============================================================================

/// Asserts that `received` is a string matched by `pattern`; returns the string.
///
/// # Errors
///
/// Returns `NOT_STRING` for non-strings and `NOT_MATCH` when nothing matches.
pub fn assert_match<'a>(
    received: &'a Value,
    pattern: &Pattern,
    message: Option<&str>,
) -> AssertResult<&'a str> {
    let text = assert_string(received, None)?;
    if pattern.is_match(text) {
        return Ok(text);
    }
    Err(failure(
        codes::NOT_MATCH,
        message,
        format!("Expected \"{text}\" to match {pattern}"),
        received,
        pattern.clone(),
    ))
}
