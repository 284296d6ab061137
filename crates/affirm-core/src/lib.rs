// crates/affirm-core/src/lib.rs
// ============================================================================
// Module: Affirm Core Root
// Description: Public API surface for runtime assertions.
// Purpose: Wire together the value model, comparators, combinators, and matchers.
// Dependencies: crate::{core, matchers, runtime}
// ============================================================================

//! ## Overview
//! Affirm validates dynamically-typed [`Value`]s at runtime. A failed check
//! returns an [`AssertionError`] carrying one structured [`Issue`]: a stable
//! code, a message, and the received and expected values.
//!
//! The building blocks are:
//! - [`is_deep_equal`], a pure structural comparator.
//! - [`any_of`] and [`none_of`], which compose checks into one aggregated
//!   failure.
//! - The matchers in [`matchers`], built on the two above.
//! - Outcome assertions for fallible closures and futures.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod core;
pub mod matchers;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::AssertResult;
pub use crate::core::AssertionError;
pub use crate::core::CheckError;
pub use crate::core::Class;
pub use crate::core::DEFAULT_CLOSE_TOLERANCE;
pub use crate::core::DEFAULT_MAX_RENDERED_CHARS;
pub use crate::core::DateValue;
pub use crate::core::FunctionValue;
pub use crate::core::Instance;
pub use crate::core::Issue;
pub use crate::core::MapValue;
pub use crate::core::Pattern;
pub use crate::core::PatternError;
pub use crate::core::Record;
pub use crate::core::SetValue;
pub use crate::core::Settings;
pub use crate::core::SymbolValue;
pub use crate::core::Value;
pub use crate::core::ValueKind;
pub use crate::core::codes;
pub use crate::core::render;
pub use crate::core::render_with;
pub use crate::core::stringify;
pub use crate::core::to_json;
pub use crate::matchers::*;
pub use crate::runtime::Branch;
pub use crate::runtime::BranchOutcome;
pub use crate::runtime::CombinatorTrace;
pub use crate::runtime::DISJUNCTION_SEPARATOR;
pub use crate::runtime::Failure;
pub use crate::runtime::NoopTrace;
pub use crate::runtime::Predicate;
pub use crate::runtime::any_of;
pub use crate::runtime::any_of_traced;
pub use crate::runtime::assert_rejects;
pub use crate::runtime::assert_resolves;
pub use crate::runtime::assert_throws;
pub use crate::runtime::is_deep_equal;
pub use crate::runtime::none_of;
pub use crate::runtime::none_of_traced;
