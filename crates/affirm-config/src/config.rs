// crates/affirm-config/src/config.rs
// ============================================================================
// Module: Affirm Configuration
// Description: Configuration loading and validation for Affirm.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: affirm-core, serde, thiserror, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path comes from the caller, then the `AFFIRM_CONFIG` environment
//! variable, then `affirm.toml` in the working directory. Every section is
//! optional and defaults to the values in [`affirm_core::Settings`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use affirm_core::DEFAULT_CLOSE_TOLERANCE;
use affirm_core::DEFAULT_MAX_RENDERED_CHARS;
use affirm_core::Settings;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "affirm.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "AFFIRM_CONFIG";
/// Maximum config file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Smallest accepted `report.max_rendered_chars`.
pub const MIN_RENDERED_CHARS: usize = 16;
/// Largest accepted `report.max_rendered_chars`.
pub const MAX_RENDERED_CHARS: usize = 1_000_000;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Affirm configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AffirmConfig {
    /// Matcher defaults.
    #[serde(default)]
    pub matchers: MatchersConfig,
    /// Failure report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl AffirmConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config = Self::from_toml_str(content)?;
        debug!(path = %resolved.display(), "loaded affirm config");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matchers.validate()?;
        self.report.validate()
    }

    /// Returns the runtime settings described by this configuration.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            close_tolerance: self.matchers.close_tolerance,
            max_rendered_chars: self.report.max_rendered_chars,
        }
    }
}

/// Matcher defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchersConfig {
    /// Tolerance used by `assert_close_to_with`.
    #[serde(default = "default_close_tolerance")]
    pub close_tolerance: f64,
}

impl Default for MatchersConfig {
    fn default() -> Self {
        Self {
            close_tolerance: default_close_tolerance(),
        }
    }
}

impl MatchersConfig {
    /// Validates matcher settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.close_tolerance.is_finite() {
            return Err(ConfigError::Invalid(
                "matchers.close_tolerance must be finite".to_string(),
            ));
        }
        if self.close_tolerance < 0.0 {
            return Err(ConfigError::Invalid(
                "matchers.close_tolerance must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Failure report settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Maximum characters rendered per value before truncation.
    #[serde(default = "default_max_rendered_chars")]
    pub max_rendered_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_rendered_chars: default_max_rendered_chars(),
        }
    }
}

impl ReportConfig {
    /// Validates report settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RENDERED_CHARS..=MAX_RENDERED_CHARS).contains(&self.max_rendered_chars) {
            return Err(ConfigError::Invalid(format!(
                "report.max_rendered_chars must be between {MIN_RENDERED_CHARS} and \
                 {MAX_RENDERED_CHARS}"
            )));
        }
        Ok(())
    }
}

/// Default for `matchers.close_tolerance`.
const fn default_close_tolerance() -> f64 {
    DEFAULT_CLOSE_TOLERANCE
}

/// Default for `report.max_rendered_chars`.
const fn default_max_rendered_chars() -> usize {
    DEFAULT_MAX_RENDERED_CHARS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
