// crates/affirm-core/src/matchers/mod.rs
// ============================================================================
// Module: Affirm Matchers
// Description: Ready-made assertions over runtime values.
// Purpose: Validate types, presence, equality, ordering, patterns, and contents.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Every matcher takes the received value and an optional custom message. On
//! success it returns the narrowed view of the value (for example `&str` from
//! [`assert_string`]); on failure it returns an [`AssertionError`] whose issue
//! carries a stable code, the received value, and what was expected.
//!
//! Matchers that accept several shapes compose the type matchers through
//! [`crate::runtime::any_of`], so their failures report every accepted shape.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::issue::AssertionError;
use crate::core::issue::Issue;
use crate::core::value::Value;

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod collection;
pub mod equality;
pub mod ordering;
pub mod pattern;
pub mod presence;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use collection::assert_contain;
pub use collection::assert_length;
pub use equality::assert_deep_equal;
pub use equality::assert_equal;
pub use ordering::assert_close_to;
pub use ordering::assert_close_to_with;
pub use ordering::assert_greater_than;
pub use ordering::assert_greater_than_or_equal;
pub use ordering::assert_less_than;
pub use ordering::assert_less_than_or_equal;
pub use pattern::assert_match;
pub use presence::assert_defined;
pub use presence::assert_falsy;
pub use presence::assert_nan;
pub use presence::assert_null;
pub use presence::assert_truthy;
pub use presence::assert_undefined;
pub use types::assert_array;
pub use types::assert_bigint;
pub use types::assert_boolean;
pub use types::assert_date;
pub use types::assert_function;
pub use types::assert_instance_of;
pub use types::assert_map;
pub use types::assert_number;
pub use types::assert_object;
pub use types::assert_record;
pub use types::assert_reg_exp;
pub use types::assert_set;
pub use types::assert_string;
pub use types::assert_symbol;
pub use types::assert_thenable;

// ============================================================================
// SECTION: Failure Construction
// ============================================================================

/// Builds a matcher failure, preferring the caller's message over `default`.
pub(crate) fn failure(
    code: impl Into<String>,
    message: Option<&str>,
    default: impl Into<String>,
    received: &Value,
    expected: impl Into<Value>,
) -> AssertionError {
    let message = message.map_or_else(|| default.into(), str::to_string);
    AssertionError::new(Issue::new(code, message, received.clone(), expected))
}
