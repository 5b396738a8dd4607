// Rust guideline compliant 2026-10-19

//! Command implementations for the catid CLI.

pub mod catalogs;
pub mod dedup;
pub mod normalize;
pub mod parse;

use crate::terminal::read_lines;
use anyhow::{Context, Result};

/// Returns the identifiers to process.
///
/// No arguments, or a single `-`, reads one identifier per line from stdin.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub fn collect_inputs(args: Vec<String>) -> Result<Vec<String>> {
    let from_stdin = args.is_empty() || (args.len() == 1 && args[0] == "-");
    if !from_stdin {
        return Ok(args);
    }

    let stdin = std::io::stdin();
    let lines = read_lines(stdin.lock()).context("Failed to read identifiers from stdin")?;
    tracing::debug!(count = lines.len(), "read identifiers from stdin");
    Ok(lines)
}
