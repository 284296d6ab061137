// crates/affirm-core/src/runtime/deep_equal.rs
// ============================================================================
// Module: Affirm Deep Equality
// Description: Structural comparison of runtime values.
// Purpose: Decide equivalence independent of reference identity.
// Dependencies: crate::core::value
// ============================================================================

//! ## Overview
//! [`is_deep_equal`] is a pure, total comparator. It classifies each side
//! once into a [`ValueKind`] and switches exhaustively on the category:
//!
//! 1. Identical values (strict identity) are equal.
//! 2. A single absent side is unequal.
//! 3. Differing categories are unequal.
//! 4. Dates compare epoch milliseconds; invalid dates never match.
//! 5. Patterns compare canonical `/source/flags` text.
//! 6. Arrays compare length, then index-aligned elements recursively.
//! 7. Maps compare size, then every key of the left map looked up natively on
//!    the right with a recursively equal value.
//! 8. Sets compare size, then native membership of every left element. Two
//!    sets holding equal-but-distinct composites are therefore unequal.
//! 9. Records compare key count, then every left key recursively.
//! 10. Scalars, functions, and instances that are not identical are unequal.
//!
//! `NaN` equals `NaN`; `0` and `-0` are unequal. Values are immutable and
//! cannot reference themselves, so recursion always terminates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::value::DateValue;
use crate::core::value::MapValue;
use crate::core::value::Record;
use crate::core::value::SetValue;
use crate::core::value::Value;
use crate::core::value::ValueKind;

// ============================================================================
// SECTION: Comparator
// ============================================================================

/// Returns whether two values are structurally equal.
#[must_use]
pub fn is_deep_equal(left: &Value, right: &Value) -> bool {
    if Value::same_value(left, right) {
        return true;
    }

    let kind = left.kind();
    if kind == ValueKind::Absent || right.kind() == ValueKind::Absent {
        return false;
    }
    if kind != right.kind() {
        return false;
    }

    match kind {
        ValueKind::Absent | ValueKind::Scalar | ValueKind::Opaque => false,
        ValueKind::Temporal => match (left, right) {
            (Value::Date(left), Value::Date(right)) => dates_equal(left, right),
            _ => false,
        },
        ValueKind::Pattern => match (left, right) {
            (Value::RegExp(left), Value::RegExp(right)) => left.canonical() == right.canonical(),
            _ => false,
        },
        ValueKind::Sequence => match (left, right) {
            (Value::Array(left), Value::Array(right)) => sequences_equal(left, right),
            _ => false,
        },
        ValueKind::Map => match (left, right) {
            (Value::Map(left), Value::Map(right)) => maps_equal(left, right),
            _ => false,
        },
        ValueKind::Set => match (left, right) {
            (Value::Set(left), Value::Set(right)) => sets_equal(left, right),
            _ => false,
        },
        ValueKind::Record => match (left, right) {
            (Value::Record(left), Value::Record(right)) => records_equal(left, right),
            _ => false,
        },
    }
}

// ============================================================================
// SECTION: Category Rules
// ============================================================================

/// Dates match when both are valid and share an epoch millisecond.
fn dates_equal(left: &DateValue, right: &DateValue) -> bool {
    match (left.epoch_millis(), right.epoch_millis()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

/// Arrays match element-wise in order.
fn sequences_equal(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|(left, right)| is_deep_equal(left, right))
}

/// Maps match when every left key maps to a deep-equal right value.
fn maps_equal(left: &MapValue, right: &MapValue) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right.get(key).is_some_and(|other| is_deep_equal(value, other))
        })
}

/// Sets match on size and native membership.
fn sets_equal(left: &SetValue, right: &SetValue) -> bool {
    left.len() == right.len() && left.iter().all(|item| right.contains(item))
}

/// Records match when every left key has a deep-equal right value.
fn records_equal(left: &Record, right: &Record) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right.get(key).is_some_and(|other| is_deep_equal(value, other))
        })
}
