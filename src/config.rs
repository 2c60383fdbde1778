//! Resize configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. stock defaults ([`ResizeConfig::default`])
//! 2. an optional TOML file passed with `--config`
//! 3. command-line flags (`--drift-tolerance`, `--filter`)
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! drift_tolerance = 0.1   # Largest aspect-ratio change accepted without a warning
//! filter = "lanczos3"     # nearest | triangle | catmull-rom | gaussian | lanczos3
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{DriftTolerance, Filter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Resize configuration loaded from a TOML file.
///
/// All fields have defaults; a config file only needs the values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Largest aspect-ratio drift accepted without warning the user.
    pub drift_tolerance: DriftTolerance,
    /// Resampling filter.
    pub filter: Filter,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            drift_tolerance: DriftTolerance::DEFAULT,
            filter: Filter::default(),
        }
    }
}

impl ResizeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.drift_tolerance.value();
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Validation(format!(
                "drift_tolerance must be a finite number >= 0, got {tolerance}"
            )));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of this config, then re-validate.
    pub fn with_overrides(
        mut self,
        drift_tolerance: Option<f64>,
        filter: Option<Filter>,
    ) -> Result<Self, ConfigError> {
        if let Some(tolerance) = drift_tolerance {
            self.drift_tolerance = DriftTolerance(tolerance);
        }
        if let Some(filter) = filter {
            self.filter = filter;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Parse and validate config from TOML text.
pub fn parse_config(content: &str) -> Result<ResizeConfig, ConfigError> {
    let config: ResizeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file, or stock defaults when no file is given.
///
/// A path that was given but cannot be read is an error, not a fallback.
pub fn load_config(path: Option<&Path>) -> Result<ResizeConfig, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(ResizeConfig::default()),
    }
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Printed by `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# image-resize configuration
# ==========================
# All settings are optional. Values shown below are the defaults.
# Pass the file with --config; --drift-tolerance and --filter override it.
# Unknown keys will cause an error.

# Largest difference between the source and target aspect ratios
# (width / height) that is accepted without a warning. Only resizing with
# both --width and --height can change the ratio noticeably.
drift_tolerance = 0.1

# Resampling filter, from fastest to sharpest:
#   "nearest", "triangle", "catmull-rom", "gaussian", "lanczos3"
filter = "lanczos3"
"##
}
