// Rust guideline compliant 2026-10-19

//! Tracing setup for the catid CLI.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug, trace.
pub fn parse_log_level(value: &str) -> Result<Level> {
    match value.to_ascii_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level '{}'", other),
    }
}

/// Installs a stderr subscriber at the given level.
///
/// Stdout stays reserved for command output.
///
/// # Errors
///
/// Returns an error if the level name is invalid.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
