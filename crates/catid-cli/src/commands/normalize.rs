// Rust guideline compliant 2026-10-19

//! Implementation of the `catid normalize` command.

use crate::output::OutputFormatter;
use crate::resolution::resolve_batch;
use crate::terminal::print_output;
use anyhow::Result;

/// Prints the canonical identifier of each input.
///
/// # Errors
///
/// With `strict`, returns an error if any identifier is unrecognized.
pub fn execute(inputs: Vec<String>, strict: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    tracing::debug!(count = inputs.len(), "normalizing identifiers");
    let resolutions = resolve_batch(&inputs);
    if strict {
        super::parse::ensure_recognized(&resolutions)?;
    }
    print_output(&formatter.format_canonical(&resolutions));
    Ok(())
}
