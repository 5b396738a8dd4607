// Rust guideline compliant 2026-10-19

//! Implementation of the `catid catalogs` command.

use crate::output::OutputFormatter;
use crate::terminal::print_output;
use catid_core::Catalog;

/// Prints the supported catalogs in the order the resolver tries them.
pub fn execute(formatter: &dyn OutputFormatter) {
    print_output(&formatter.format_catalogs(&Catalog::RESOLUTION_ORDER));
}
