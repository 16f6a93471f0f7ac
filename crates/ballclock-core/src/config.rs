//! Run configuration.
//!
//! A [`ClockConfig`] names the ball count and the safety bound for the cycle
//! search. With the `config-loader` feature it can be read from a RON, TOML or
//! JSON file; the format is picked from the file extension.

use serde::{Deserialize, Serialize};

/// Default safety bound for the cycle search, in days. The longest cycle for
/// any supported ball count is 108,855 days (123 balls).
pub const DEFAULT_MAX_DAYS: u64 = 1_000_000;

fn default_max_days() -> u64 {
    DEFAULT_MAX_DAYS
}

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Number of balls, 27..=127.
    pub ball_count: u32,
    /// Days the cycle search may run before reporting a fault.
    #[serde(default = "default_max_days")]
    pub max_days: u64,
}

impl ClockConfig {
    pub fn new(ball_count: u32) -> Self {
        Self {
            ball_count,
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

// ===========================================================================
// Loading
// ===========================================================================

#[cfg(feature = "config-loader")]
pub use loader::{ConfigError, Format, detect_format, load_config, parse_config};

#[cfg(feature = "config-loader")]
mod loader {
    use super::ClockConfig;
    use std::path::{Path, PathBuf};

    /// Errors that can occur while loading a configuration file.
    #[derive(Debug, thiserror::Error)]
    pub enum ConfigError {
        /// The file has an extension we don't support.
        #[error("unsupported config format for file: {file}")]
        UnsupportedFormat { file: PathBuf },

        /// A deserialization error occurred.
        #[error("parse error in {file}: {detail}")]
        Parse { file: PathBuf, detail: String },

        /// An I/O error occurred.
        #[error(transparent)]
        Io(#[from] std::io::Error),
    }

    /// Supported configuration file formats.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Format {
        Ron,
        Toml,
        Json,
    }

    /// Detect the format of a file based on its extension.
    pub fn detect_format(path: &Path) -> Result<Format, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Ok(Format::Ron),
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }

    /// Parse configuration text in the given format. `origin` is only used
    /// in error messages.
    pub fn parse_config(
        content: &str,
        format: Format,
        origin: &Path,
    ) -> Result<ClockConfig, ConfigError> {
        let parse_err = |detail: String| ConfigError::Parse {
            file: origin.to_path_buf(),
            detail,
        };
        match format {
            Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string())),
            Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
            Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
        }
    }

    /// Read a configuration file, detecting its format from the extension.
    pub fn load_config(path: &Path) -> Result<ClockConfig, ConfigError> {
        let format = detect_format(path)?;
        let content = std::fs::read_to_string(path)?;
        parse_config(&content, format, path)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
