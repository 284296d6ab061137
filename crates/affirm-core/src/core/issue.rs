// crates/affirm-core/src/core/issue.rs
// ============================================================================
// Module: Affirm Issue Model
// Description: Structured assertion failures and the error types carrying them.
// Purpose: Give every failure a stable code plus the values that caused it.
// Dependencies: crate::core::{format, settings, value}, serde, thiserror
// ============================================================================

//! ## Overview
//! An [`Issue`] records one failed check: a machine-readable `code`, a
//! human-readable `message`, and the `received`/`expected` values untouched.
//! [`AssertionError`] carries exactly one issue and is never mutated once
//! built. [`CheckError`] lets caller-supplied predicates surface foreign
//! errors next to assertion failures so combinators can tell the two apart.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::core::format::render;
use crate::core::format::render_with;
use crate::core::settings::Settings;
use crate::core::value::Value;

// ============================================================================
// SECTION: Codes
// ============================================================================

/// Stable issue codes raised by this crate.
pub mod codes {
    /// Values are not structurally equal.
    pub const NOT_DEEP_EQUAL: &str = "NOT_DEEP_EQUAL";
    /// Every branch of `any_of` failed.
    pub const NOT_ANY_OF: &str = "NOT_ANY_OF";
    /// A branch of `none_of` passed.
    pub const UNEXPECTED_PASS: &str = "UNEXPECTED_PASS";
    /// Value is not a function (or a combinator element is not callable).
    pub const NOT_FUNCTION: &str = "NOT_FUNCTION";
    /// Values are not identical.
    pub const NOT_EQUAL: &str = "NOT_EQUAL";
    /// Value is not a string.
    pub const NOT_STRING: &str = "NOT_STRING";
    /// Value is not a number.
    pub const NOT_NUMBER: &str = "NOT_NUMBER";
    /// Value is not a bigint.
    pub const NOT_BIGINT: &str = "NOT_BIGINT";
    /// Value is not a boolean.
    pub const NOT_BOOLEAN: &str = "NOT_BOOLEAN";
    /// Value is not a symbol.
    pub const NOT_SYMBOL: &str = "NOT_SYMBOL";
    /// Value is not an array.
    pub const NOT_ARRAY: &str = "NOT_ARRAY";
    /// Value is not an object.
    pub const NOT_OBJECT: &str = "NOT_OBJECT";
    /// Value is not a plain record.
    pub const NOT_RECORD: &str = "NOT_RECORD";
    /// Value is not a map.
    pub const NOT_MAP: &str = "NOT_MAP";
    /// Value is not a set.
    pub const NOT_SET: &str = "NOT_SET";
    /// Value is not a date.
    pub const NOT_DATE: &str = "NOT_DATE";
    /// Value is not a regular expression.
    pub const NOT_REG_EXP: &str = "NOT_REG_EXP";
    /// Value is not null.
    pub const NOT_NULL: &str = "NOT_NULL";
    /// Value is not undefined.
    pub const NOT_UNDEFINED: &str = "NOT_UNDEFINED";
    /// Value is undefined.
    pub const NOT_DEFINED: &str = "NOT_DEFINED";
    /// Value is not `NaN`.
    pub const NOT_NAN: &str = "NOT_NAN";
    /// Value is falsy.
    pub const NOT_TRUTHY: &str = "NOT_TRUTHY";
    /// Value is truthy.
    pub const NOT_FALSY: &str = "NOT_FALSY";
    /// Value has no callable `then`.
    pub const NOT_THENABLE: &str = "NOT_THENABLE";
    /// Value is not an instance of the class.
    pub const NOT_INSTANCE_OF: &str = "NOT_INSTANCE_OF";
    /// Value is not greater than the bound.
    pub const NOT_GREATER_THAN: &str = "NOT_GREATER_THAN";
    /// Value is not greater than or equal to the bound.
    pub const NOT_GREATER_THAN_OR_EQUAL: &str = "NOT_GREATER_THAN_OR_EQUAL";
    /// Value is not less than the bound.
    pub const NOT_LESS_THAN: &str = "NOT_LESS_THAN";
    /// Value is not less than or equal to the bound.
    pub const NOT_LESS_THAN_OR_EQUAL: &str = "NOT_LESS_THAN_OR_EQUAL";
    /// Value is outside the tolerance.
    pub const NOT_CLOSE_TO: &str = "NOT_CLOSE_TO";
    /// String does not match the pattern.
    pub const NOT_MATCH: &str = "NOT_MATCH";
    /// Function completed without an error.
    pub const NOT_THROWN: &str = "NOT_THROWN";
    /// Future completed with an error.
    pub const NOT_RESOLVED: &str = "NOT_RESOLVED";
    /// Future completed without an error.
    pub const NOT_REJECTED: &str = "NOT_REJECTED";
}

// ============================================================================
// SECTION: Issue
// ============================================================================

/// One structured assertion failure.
///
/// # Invariants
/// - `message` is non-empty once wrapped in an [`AssertionError`].
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Machine-readable failure category.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
    /// The value that failed validation, as received.
    pub received: Value,
    /// The value, type name, or description that was required.
    pub expected: Value,
}

impl Issue {
    /// Creates an issue.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        received: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            received: received.into(),
            expected: expected.into(),
        }
    }
}

// ============================================================================
// SECTION: Assertion Error
// ============================================================================

/// Error raised when an assertion fails.
///
/// # Invariants
/// - Carries exactly one [`Issue`] and is never mutated after construction.
#[derive(Debug, Clone)]
pub struct AssertionError {
    /// The failure record.
    issue: Issue,
}

impl AssertionError {
    /// Stable discriminator for assertion failures.
    pub const KIND: &'static str = "AssertionError";

    /// Wraps an issue, substituting a code-derived message when it is empty.
    #[must_use]
    pub fn new(mut issue: Issue) -> Self {
        if issue.message.trim().is_empty() {
            issue.message = format!("Assertion failed with {}", issue.code);
        }
        Self {
            issue,
        }
    }

    /// Returns [`AssertionError::KIND`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Returns the carried issue.
    #[must_use]
    pub const fn issue(&self) -> &Issue {
        &self.issue
    }

    /// Returns the issue code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.issue.code
    }

    /// Returns the issue message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.issue.message
    }

    /// Returns the received value.
    #[must_use]
    pub const fn received(&self) -> &Value {
        &self.issue.received
    }

    /// Returns the expected value.
    #[must_use]
    pub const fn expected(&self) -> &Value {
        &self.issue.expected
    }

    /// Consumes the error and returns its issue.
    #[must_use]
    pub fn into_issue(self) -> Issue {
        self.issue
    }

    /// Renders the one-line report with values truncated per `settings`.
    #[must_use]
    pub fn render(&self, settings: &Settings) -> String {
        format!(
            "{}: {} (expected: {}, received: {})",
            self.issue.code,
            self.issue.message,
            render_with(&self.issue.expected, settings),
            render_with(&self.issue.received, settings),
        )
    }
}

impl From<Issue> for AssertionError {
    fn from(issue: Issue) -> Self {
        Self::new(issue)
    }
}

impl fmt::Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (expected: {}, received: {})",
            self.issue.code,
            self.issue.message,
            render(&self.issue.expected),
            render(&self.issue.received),
        )
    }
}

impl StdError for AssertionError {}

// ============================================================================
// SECTION: Check Error
// ============================================================================

/// Failure of a caller-supplied check: an assertion failure or anything else.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The library's own structured failure.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    /// Any other error; never aggregated or reclassified.
    #[error("{0}")]
    Foreign(Box<dyn StdError + Send + Sync>),
}

impl CheckError {
    /// Wraps a foreign error.
    pub fn foreign(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Foreign(error.into())
    }

    /// Returns the assertion failure, if this is one.
    #[must_use]
    pub const fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            Self::Assertion(error) => Some(error),
            Self::Foreign(_) => None,
        }
    }

    /// Returns true for assertion failures.
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Result of an assertion; the success payload is the narrowed value.
pub type AssertResult<T = ()> = Result<T, AssertionError>;
