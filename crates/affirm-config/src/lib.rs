// crates/affirm-config/src/lib.rs
// ============================================================================
// Module: Affirm Config Library
// Description: Configuration model and validation for assertion settings.
// Purpose: Single source of truth for affirm.toml semantics.
// Dependencies: affirm-core, serde, toml
// ============================================================================

//! ## Overview
//! `affirm-config` loads `affirm.toml`, validates it, and converts it into
//! [`affirm_core::Settings`]. Loading fails closed: oversized, non-UTF-8,
//! unknown, or out-of-range input is rejected.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
