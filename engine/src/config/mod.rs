//! Configuration management
//!
//! This module handles loading and validation of the triage configuration.
//! Configuration is stored in TOML format at ~/.fieldtriage/config.toml.
//!
//! # Configuration Sections
//!
//! - **core**: Log level
//! - **report**: What the printed report includes besides the guidance
//! - **vitals**: Normal ranges used to band vitals readings
//!
//! A missing default file is not an error and nothing is written to disk;
//! built-in defaults are used instead. Every section and field is optional.
//!
//! # Examples
//!
//! ```no_run
//! use triage_engine::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_or_default()?;
//! println!("Log level: {}", config.core.log_level);
//! # Ok(())
//! # }
//! ```

use crate::vitals::VitalRanges;
use sdk::errors::TriageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log levels accepted in `core.log_level` and by `--log`
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Core settings
    #[serde(default)]
    pub core: CoreConfig,

    /// Report layout
    #[serde(default)]
    pub report: ReportConfig,

    /// Vitals normal ranges
    #[serde(default)]
    pub vitals: VitalRanges,
}

/// Core configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Show the advice for when emergency services are unreachable
    #[serde(default = "default_true")]
    pub show_banner: bool,

    /// Show the decision-support disclaimer
    #[serde(default = "default_true")]
    pub show_disclaimer: bool,

    /// Always append the spoken utterance
    #[serde(default)]
    pub speak: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            show_disclaimer: true,
            speak: false,
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_or_default() -> Result<Self, TriageError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load_from_path(path: &Path) -> Result<Self, TriageError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TriageError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, TriageError> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| TriageError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String, TriageError> {
        toml::to_string_pretty(self)
            .map_err(|e| TriageError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Default configuration file path (~/.fieldtriage/config.toml)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".fieldtriage").join("config.toml"))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Config` if the log level is unknown or a vitals
    /// range is inverted or outside the accepted bounds.
    pub fn validate(&self) -> Result<(), TriageError> {
        if !VALID_LOG_LEVELS.contains(&self.core.log_level.as_str()) {
            return Err(TriageError::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.core.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        self.vitals.validate()
    }
}
