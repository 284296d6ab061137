// crates/affirm-core/src/runtime/outcome.rs
// ============================================================================
// Module: Affirm Outcome Assertions
// Description: Assertions about whether an operation succeeds or fails.
// Purpose: Check fallible closures and futures without inspecting their errors.
// Dependencies: crate::core::issue, tracing
// ============================================================================

//! ## Overview
//! Outcome assertions run an operation once and assert on how it completed.
//! Only the outcome matters; the error value is handed back untouched on the
//! success path so callers can inspect it further.
//!
//! The async variants await the future exactly once. There is no timeout,
//! retry, or cancellation, and no runtime is assumed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::core::issue::AssertResult;
use crate::core::issue::AssertionError;
use crate::core::issue::Issue;
use crate::core::issue::codes;

// ============================================================================
// SECTION: Synchronous
// ============================================================================

/// Asserts that `operation` returns an error; returns that error.
///
/// # Errors
///
/// Returns `NOT_THROWN` when `operation` returns `Ok`.
pub fn assert_throws<T, E>(
    operation: impl FnOnce() -> Result<T, E>,
    message: Option<&str>,
) -> AssertResult<E> {
    match operation() {
        Err(error) => Ok(error),
        Ok(_) => {
            debug!("operation completed without an error");
            Err(AssertionError::new(Issue::new(
                codes::NOT_THROWN,
                message.unwrap_or("Expected function to throw"),
                "no error",
                "an error",
            )))
        }
    }
}

// ============================================================================
// SECTION: Asynchronous
// ============================================================================

/// Asserts that `future` resolves with `Ok`; returns the resolved value.
///
/// # Errors
///
/// Returns `NOT_RESOLVED` when the future completes with `Err`.
pub async fn assert_resolves<T, E>(
    future: impl Future<Output = Result<T, E>>,
    message: Option<&str>,
) -> AssertResult<T> {
    match future.await {
        Ok(value) => Ok(value),
        Err(_) => {
            debug!("future completed with an error");
            Err(AssertionError::new(Issue::new(
                codes::NOT_RESOLVED,
                message.unwrap_or("Expected function to resolve"),
                "a rejection",
                "a resolution",
            )))
        }
    }
}

/// Asserts that `future` completes with `Err`; returns the error.
///
/// # Errors
///
/// Returns `NOT_REJECTED` when the future completes with `Ok`.
pub async fn assert_rejects<T, E>(
    future: impl Future<Output = Result<T, E>>,
    message: Option<&str>,
) -> AssertResult<E> {
    match future.await {
        Err(error) => Ok(error),
        Ok(_) => {
            debug!("future completed without an error");
            Err(AssertionError::new(Issue::new(
                codes::NOT_REJECTED,
                message.unwrap_or("Expected function to reject"),
                "no rejection",
                "a rejection",
            )))
        }
    }
}
