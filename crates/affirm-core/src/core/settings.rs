// crates/affirm-core/src/core/settings.rs
// ============================================================================
// Module: Affirm Settings
// Description: Tunable defaults for matchers and failure reports.
// Purpose: Carry configuration values into assertion code without globals.
// Dependencies: none
// ============================================================================

//! ## Overview
//! [`Settings`] is the runtime form of the assertion configuration. Callers
//! build it directly or load it through `affirm-config`, then pass it to the
//! `*_with` matcher variants and to [`crate::AssertionError::render`].

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default tolerance used by `assert_close_to`.
pub const DEFAULT_CLOSE_TOLERANCE: f64 = 1e-7;

/// Default cap on characters rendered per value in failure reports.
pub const DEFAULT_MAX_RENDERED_CHARS: usize = 200;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Assertion settings.
///
/// # Invariants
/// - `close_tolerance` is finite and non-negative when produced by `affirm-config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Maximum absolute difference accepted by `assert_close_to_with`.
    pub close_tolerance: f64,
    /// Maximum characters rendered per value before truncation.
    pub max_rendered_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            close_tolerance: DEFAULT_CLOSE_TOLERANCE,
            max_rendered_chars: DEFAULT_MAX_RENDERED_CHARS,
        }
    }
}
