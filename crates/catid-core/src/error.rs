// Rust guideline compliant 2026-10-19

//! Error types for the catid core library.
//!
//! Identifier resolution itself never fails; these errors cover the
//! surrounding concerns (configuration, IO, catalog code lookup).

use thiserror::Error;

/// Result type alias for catid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catid operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Catalog code is not part of the supported set.
    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),
}
