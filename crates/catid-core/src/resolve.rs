// Rust guideline compliant 2026-10-19

//! Resolution and normalization facades.

use crate::matchers::match_catalog;
use crate::models::{Catalog, CatalogMatch};
use crate::normalize::build_canonical_id;

/// Resolves a free-form identifier to its catalog match.
///
/// Catalog matchers are tried in [`Catalog::RESOLUTION_ORDER`] and the first
/// hit wins. Matching runs on the uppercased token (the same string the
/// fallback in [`normalize_catalog_identifier`] produces), so characters
/// whose uppercase form expands (`ß` → `SS`) resolve identically on the
/// first and any later pass.
///
/// # Arguments
///
/// * `input` - Raw identifier, e.g. `"NGC 4038A"` or `"Sh2–155"`
///
/// # Returns
///
/// The first matching catalog entry, or `None` for blank or unrecognized
/// input.
pub fn parse_catalog_identifier(input: &str) -> Option<CatalogMatch> {
    let token = build_canonical_id(input);
    if token.is_empty() {
        return None;
    }

    Catalog::RESOLUTION_ORDER
        .iter()
        .find_map(|&catalog| match_catalog(catalog, &token))
}

/// Returns the canonical lookup key for an identifier.
///
/// Recognized identifiers use their catalog's canonical form; anything else
/// falls back to [`build_canonical_id`]. Never fails, and the result is
/// stable under re-normalization.
///
/// # Examples
///
/// ```
/// use catid_core::normalize_catalog_identifier;
/// assert_eq!(normalize_catalog_identifier("ngc 7000"), "NGC7000");
/// assert_eq!(normalize_catalog_identifier("Andromeda  Galaxy"), "ANDROMEDA GALAXY");
/// ```
pub fn normalize_catalog_identifier(input: &str) -> String {
    match parse_catalog_identifier(input) {
        Some(found) => found.into_normalized(),
        None => build_canonical_id(input),
    }
}

/// Returns true when two identifiers name the same catalog entry.
///
/// Blank identifiers are never equivalent, not even to each other.
pub fn identifiers_equivalent(a: &str, b: &str) -> bool {
    let left = normalize_catalog_identifier(a);
    !left.is_empty() && left == normalize_catalog_identifier(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_has_no_match() {
        assert!(parse_catalog_identifier("").is_none());
        assert!(parse_catalog_identifier(" \t\n").is_none());
    }

    #[test]
    fn test_expanding_uppercase_is_stable() {
        let first = normalize_catalog_identifier("Meßier 42");
        assert_eq!(first, "M42");
        assert_eq!(normalize_catalog_identifier(&first), first);
    }

    #[test]
    fn test_equivalence() {
        assert!(identifiers_equivalent("NGC 7000", "ngc7000"));
        assert!(identifiers_equivalent("Sh2-155", "SHARPLESS 155"));
        assert!(identifiers_equivalent("Andromeda Galaxy", "andromeda  galaxy"));
        assert!(!identifiers_equivalent("M31", "M32"));
        assert!(!identifiers_equivalent("", "  "));
    }
}
