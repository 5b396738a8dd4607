// Rust guideline compliant 2026-10-19

//! Implementation of the `catid dedup` command.

use crate::output::OutputFormatter;
use crate::terminal::print_output;
use catid_core::{unique_identifiers, unique_strings};

/// Deduplicates names, by case-folded text or by canonical identifier.
pub fn run(names: &[String], canonical: bool) -> Vec<String> {
    let entries = names.iter().map(Some);
    let unique = if canonical {
        unique_identifiers(entries)
    } else {
        unique_strings(entries)
    };
    tracing::debug!(
        before = names.len(),
        after = unique.len(),
        canonical,
        "deduplicated names"
    );
    unique
}

/// Executes `catid dedup`.
pub fn execute(names: Vec<String>, canonical: bool, formatter: &dyn OutputFormatter) {
    let unique = run(&names, canonical);
    print_output(&formatter.format_names(&unique));
}
