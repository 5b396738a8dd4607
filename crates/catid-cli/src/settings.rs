// Rust guideline compliant 2026-10-19

//! Configuration loading and output format selection for the CLI.

use anyhow::{Context, Result};
use catid_core::config::CONFIG_FILE_NAME;
use catid_core::{Config, OutputFormat};
use std::path::{Path, PathBuf};

/// Loads the configuration from `path`, or from `catid.toml` in the working
/// directory when no path is given.
///
/// # Errors
///
/// Returns an error if the file is unreadable, is not valid TOML, or a
/// `CATID_*` override is invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), Path::to_path_buf);
    Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Picks the output format name.
///
/// An explicit request from the command line wins over the configuration,
/// which wins over the table default. Pass `None` for `config` when it could
/// not be loaded.
pub fn select_format(requested: Option<OutputFormat>, config: Option<&Config>) -> &'static str {
    let format = requested
        .or_else(|| config.map(|c| c.output_format))
        .unwrap_or_default();
    match format {
        OutputFormat::Json => "json",
        OutputFormat::Table => "table",
        OutputFormat::Plain => "plain",
    }
}
