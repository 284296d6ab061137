// crates/affirm-core/src/runtime/mod.rs
// ============================================================================
// Module: Affirm Runtime
// Description: Comparator, combinators, and outcome assertions.
// Purpose: Evaluate assertions over runtime values.
// Dependencies: crate::runtime::{combinator, deep_equal, outcome}
// ============================================================================

//! ## Overview
//! Runtime modules hold the evaluation logic. Everything here is pure apart
//! from running caller-supplied predicates and futures.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod combinator;
pub mod deep_equal;
pub mod outcome;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use combinator::Branch;
pub use combinator::BranchOutcome;
pub use combinator::CombinatorTrace;
pub use combinator::DISJUNCTION_SEPARATOR;
pub use combinator::Failure;
pub use combinator::NoopTrace;
pub use combinator::Predicate;
pub use combinator::any_of;
pub use combinator::any_of_traced;
pub use combinator::none_of;
pub use combinator::none_of_traced;
pub use deep_equal::is_deep_equal;
pub use outcome::assert_rejects;
pub use outcome::assert_resolves;
pub use outcome::assert_throws;
