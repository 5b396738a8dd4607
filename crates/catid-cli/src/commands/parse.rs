// Rust guideline compliant 2026-10-19

//! Implementation of the `catid parse` command.

use crate::output::OutputFormatter;
use crate::resolution::{resolve_batch, Resolution};
use crate::terminal::{print_output, print_warning};
use anyhow::{bail, Result};

/// Resolves identifiers and returns their structured matches.
///
/// # Errors
///
/// With `strict`, returns an error if any identifier is unrecognized.
pub fn run(inputs: &[String], strict: bool) -> Result<Vec<Resolution>> {
    tracing::debug!(count = inputs.len(), "resolving identifiers");
    let resolutions = resolve_batch(inputs);
    if strict {
        ensure_recognized(&resolutions)?;
    }
    Ok(resolutions)
}

/// One warning line per unrecognized input, in input order.
pub fn unrecognized_warnings(resolutions: &[Resolution]) -> Vec<String> {
    resolutions
        .iter()
        .filter(|r| !r.is_recognized())
        .map(|r| format!("Unrecognized identifier: {}", r.input))
        .collect()
}

/// Fails when any resolution fell back to the generic canonical form.
///
/// # Errors
///
/// Returns an error naming the count of unrecognized identifiers.
pub fn ensure_recognized(resolutions: &[Resolution]) -> Result<()> {
    let warnings = unrecognized_warnings(resolutions);
    if warnings.is_empty() {
        return Ok(());
    }

    for warning in &warnings {
        print_warning(warning);
    }
    bail!(
        "{} of {} identifiers not recognized by any catalog",
        warnings.len(),
        resolutions.len()
    );
}

/// Executes `catid parse`.
///
/// # Errors
///
/// Returns an error under `strict` when an identifier is unrecognized.
pub fn execute(inputs: Vec<String>, strict: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    let resolutions = run(&inputs, strict)?;
    print_output(&formatter.format_matches(&resolutions));
    Ok(())
}
