// crates/affirm-core/src/core/mod.rs
// ============================================================================
// Module: Affirm Core Types
// Description: Value model, failure records, formatting, and settings.
// Purpose: Provide the shared vocabulary every assertion is written in.
// Dependencies: crate::core::{format, issue, settings, value}
// ============================================================================

//! ## Overview
//! Core types are leaves: nothing here evaluates assertions. Runtime modules
//! and matchers build on these definitions.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod format;
pub mod issue;
pub mod settings;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use format::render;
pub use format::render_with;
pub use format::stringify;
pub use format::to_json;
pub use issue::AssertResult;
pub use issue::AssertionError;
pub use issue::CheckError;
pub use issue::Issue;
pub use issue::codes;
pub use settings::DEFAULT_CLOSE_TOLERANCE;
pub use settings::DEFAULT_MAX_RENDERED_CHARS;
pub use settings::Settings;
pub use value::Class;
pub use value::DateValue;
pub use value::FunctionValue;
pub use value::Instance;
pub use value::MapValue;
pub use value::Pattern;
pub use value::PatternError;
pub use value::Record;
pub use value::SetValue;
pub use value::SymbolValue;
pub use value::Value;
pub use value::ValueKind;
