// Rust guideline compliant 2026-10-19

//! Batch resolution of command-line input.

use catid_core::{build_canonical_id, parse_catalog_identifier, CatalogMatch};
use rayon::prelude::*;
use serde::Serialize;

/// Outcome of resolving one input identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The identifier as given.
    pub input: String,
    /// Catalog match, if any family recognized the input.
    #[serde(rename = "match")]
    pub found: Option<CatalogMatch>,
    /// Canonical lookup key (catalog form or generic fallback).
    pub canonical: String,
}

impl Resolution {
    /// Resolves a single identifier.
    pub fn resolve(input: &str) -> Self {
        let found = parse_catalog_identifier(input);
        let canonical = match &found {
            Some(found) => found.normalized().to_string(),
            None => build_canonical_id(input),
        };
        Self {
            input: input.to_string(),
            found,
            canonical,
        }
    }

    /// Returns true when a catalog recognized the input.
    pub fn is_recognized(&self) -> bool {
        self.found.is_some()
    }
}

/// Resolves identifiers in parallel, keeping input order.
pub fn resolve_batch(inputs: &[String]) -> Vec<Resolution> {
    inputs.par_iter().map(|input| Resolution::resolve(input)).collect()
}
