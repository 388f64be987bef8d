//! Settings parser
//!
//! Parses an optional `squarelog.toml` into the settings the driver runs
//! with. Every table and key is optional; missing values fall back to the
//! built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::log::file::validate_logger_name;
use crate::log::Level;

/// Logger name used when none is configured
pub const DEFAULT_LOGGER_NAME: &str = "__main__";

/// Log file used when none is configured
pub const DEFAULT_LOG_FILE: &str = "sq_new.log";

/// Number squared when none is configured
pub const DEFAULT_INPUT: i64 = 10;

/// Where and how records are written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerSettings {
    /// Logger name, the second field of every line
    #[serde(default = "default_logger_name")]
    pub name: String,
    /// Minimum severity that gets recorded
    #[serde(default)]
    pub level: Level,
    /// Destination file
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_logger_name() -> String {
    DEFAULT_LOGGER_NAME.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            name: default_logger_name(),
            level: Level::default(),
            file: default_log_file(),
        }
    }
}

/// What gets computed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComputeSettings {
    /// Number to square
    #[serde(default = "default_input")]
    pub input: i64,
}

const fn default_input() -> i64 {
    DEFAULT_INPUT
}

impl Default for ComputeSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
        }
    }
}

/// Top-level settings parsed from `squarelog.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
    /// Computation configuration
    #[serde(default)]
    pub compute: ComputeSettings,
}

impl Settings {
    /// Parse a settings file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse settings content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        validate_logger_name(&self.logger.name)?;

        if self.logger.file.as_os_str().is_empty() {
            bail!("Log file path cannot be empty");
        }

        Ok(())
    }
}
