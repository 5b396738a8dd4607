// Rust guideline compliant 2026-10-19

//! Configuration management for catid.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "catid.toml";

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for catid behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether `dedup` collapses identifiers by canonical form by default.
    #[serde(default)]
    pub canonical_dedup: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            canonical_dedup: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if it exists
    /// 3. Environment variables with `CATID_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!("{}: {}", path.display(), e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CATID_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `CATID_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `CATID_CANONICAL_DEDUP` - Canonical dedup default (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CATID_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "CATID_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("CATID_LOG_LEVEL") {
            self.log_level = val.to_ascii_lowercase();
        }

        if let Ok(val) = std::env::var("CATID_CANONICAL_DEDUP") {
            self.canonical_dedup = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "CATID_CANONICAL_DEDUP must be true or false".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a known level.
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(crate::Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
