// crates/affirm-core/src/matchers/ordering.rs
// ============================================================================
// Module: Affirm Ordering Matchers
// Description: Numeric ordering and tolerance assertions.
// Purpose: Compare numbers and bigints exactly, including across the two.
// Dependencies: crate::core, crate::runtime::combinator, bigdecimal
// ============================================================================

//! ## Overview
//! Ordering matchers accept numbers and bigints on either side. Both operands
//! are validated through [`any_of`], so a non-numeric operand fails with
//! `NOT_ANY_OF` listing `number | bigint`.
//!
//! Finite operands are compared as decimals, which keeps mixed number/bigint
//! comparisons exact. Infinities order outside every finite value. `NaN` is
//! unordered and never satisfies a relation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::failure;
use super::types::assert_bigint;
use super::types::assert_number;
use crate::core::format::render;
use crate::core::issue::AssertResult;
use crate::core::issue::AssertionError;
use crate::core::issue::codes;
use crate::core::settings::Settings;
use crate::core::value::Value;
use crate::runtime::combinator::Branch;
use crate::runtime::combinator::any_of;

// ============================================================================
// SECTION: Relations
// ============================================================================

/// Ordering relation checked by a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    /// Strictly greater.
    Greater,
    /// Greater or equal.
    GreaterOrEqual,
    /// Strictly less.
    Less,
    /// Less or equal.
    LessOrEqual,
}

impl Relation {
    /// Returns the failure code for this relation.
    const fn code(self) -> &'static str {
        match self {
            Self::Greater => codes::NOT_GREATER_THAN,
            Self::GreaterOrEqual => codes::NOT_GREATER_THAN_OR_EQUAL,
            Self::Less => codes::NOT_LESS_THAN,
            Self::LessOrEqual => codes::NOT_LESS_THAN_OR_EQUAL,
        }
    }

    /// Returns the phrase used in default messages.
    const fn phrase(self) -> &'static str {
        match self {
            Self::Greater => "greater than",
            Self::GreaterOrEqual => "greater than or equal to",
            Self::Less => "less than",
            Self::LessOrEqual => "less than or equal to",
        }
    }

    /// Returns whether `ordering` (received relative to expected) satisfies the relation.
    const fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Greater => matches!(ordering, Ordering::Greater),
            Self::GreaterOrEqual => matches!(ordering, Ordering::Greater | Ordering::Equal),
            Self::Less => matches!(ordering, Ordering::Less),
            Self::LessOrEqual => matches!(ordering, Ordering::Less | Ordering::Equal),
        }
    }
}

// ============================================================================
// SECTION: Ordering Matchers
// ============================================================================

/// Asserts that `received > expected`.
///
/// # Errors
///
/// Returns `NOT_ANY_OF` for non-numeric operands and `NOT_GREATER_THAN` otherwise.
pub fn assert_greater_than(received: &Value, expected: &Value, message: Option<&str>) -> AssertResult {
    assert_relation(Relation::Greater, received, expected, message)
}

/// Asserts that `received >= expected`.
///
/// # Errors
///
/// Returns `NOT_ANY_OF` for non-numeric operands and `NOT_GREATER_THAN_OR_EQUAL` otherwise.
pub fn assert_greater_than_or_equal(
    received: &Value,
    expected: &Value,
    message: Option<&str>,
) -> AssertResult {
    assert_relation(Relation::GreaterOrEqual, received, expected, message)
}

/// Asserts that `received < expected`.
///
/// # Errors
///
/// Returns `NOT_ANY_OF` for non-numeric operands and `NOT_LESS_THAN` otherwise.
pub fn assert_less_than(received: &Value, expected: &Value, message: Option<&str>) -> AssertResult {
    assert_relation(Relation::Less, received, expected, message)
}

/// Asserts that `received <= expected`.
///
/// # Errors
///
/// Returns `NOT_ANY_OF` for non-numeric operands and `NOT_LESS_THAN_OR_EQUAL` otherwise.
pub fn assert_less_than_or_equal(
    received: &Value,
    expected: &Value,
    message: Option<&str>,
) -> AssertResult {
    assert_relation(Relation::LessOrEqual, received, expected, message)
}

/// Shared body of the ordering matchers.
fn assert_relation(
    relation: Relation,
    received: &Value,
    expected: &Value,
    message: Option<&str>,
) -> AssertResult {
    assert_numeric(received)?;
    assert_numeric(expected)?;
    if numeric_cmp(received, expected).is_some_and(|ordering| relation.holds(ordering)) {
        return Ok(());
    }
    Err(failure(
        relation.code(),
        message,
        format!("Expected {} to be {} {}", render(received), relation.phrase(), render(expected)),
        received,
        expected.clone(),
    ))
}

/// Requires a number or a bigint.
fn assert_numeric(value: &Value) -> AssertResult {
    any_of::<AssertionError, _>([
        Branch::check(&|| assert_number(value, None)),
        Branch::check(&|| assert_bigint(value, None)),
    ])
}

// ============================================================================
// SECTION: Tolerance
// ============================================================================

/// Asserts that `|received - expected| <= tolerance`; returns the received number.
///
/// A `NaN` difference never passes.
///
/// # Errors
///
/// Returns `NOT_NUMBER` when `received` is not a number and `NOT_CLOSE_TO`
/// when the difference exceeds the tolerance.
pub fn assert_close_to(
    received: &Value,
    expected: f64,
    tolerance: f64,
    message: Option<&str>,
) -> AssertResult<f64> {
    let number = assert_number(received, message)?;
    let difference = (number - expected).abs();
    if difference <= tolerance {
        return Ok(number);
    }
    Err(failure(
        codes::NOT_CLOSE_TO,
        message,
        format!(
            "Expected {} to be close to {} (±{})",
            render(received),
            render(&Value::Number(expected)),
            render(&Value::Number(tolerance)),
        ),
        received,
        expected,
    ))
}

/// [`assert_close_to`] using `settings.close_tolerance`.
///
/// # Errors
///
/// Same as [`assert_close_to`].
pub fn assert_close_to_with(
    received: &Value,
    expected: f64,
    settings: &Settings,
    message: Option<&str>,
) -> AssertResult<f64> {
    assert_close_to(received, expected, settings.close_tolerance, message)
}

// ============================================================================
// SECTION: Numeric Comparison
// ============================================================================

/// Numeric operand projected onto an ordered domain.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Numeric {
    /// Negative infinity.
    NegativeInfinity,
    /// Any finite number or bigint.
    Finite(BigDecimal),
    /// Positive infinity.
    PositiveInfinity,
}

/// Orders two numeric values; `None` when either is `NaN` or non-numeric.
fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    let left = numeric(left)?;
    let right = numeric(right)?;
    Some(left.cmp(&right))
}

/// Projects a number or bigint onto [`Numeric`].
fn numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::BigInt(number) => Some(Numeric::Finite(BigDecimal::new(number.clone(), 0))),
        Value::Number(number) if number.is_nan() => None,
        Value::Number(number) if number.is_infinite() => Some(if number.is_sign_positive() {
            Numeric::PositiveInfinity
        } else {
            Numeric::NegativeInfinity
        }),
        Value::Number(number) => BigDecimal::from_str(&number.to_string()).ok().map(Numeric::Finite),
        _ => None,
    }
}
