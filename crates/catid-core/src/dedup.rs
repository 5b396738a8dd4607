// Rust guideline compliant 2026-10-19

//! Order-preserving deduplication of identifier and alias lists.

use crate::resolve::normalize_catalog_identifier;
use std::collections::HashSet;

/// Keeps the first trimmed, non-blank entry for each distinct key.
fn unique_by<I, S, K>(items: I, key: K) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
    K: Fn(&str) -> String,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for item in items.into_iter().flatten() {
        let trimmed = item.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(key(trimmed)) {
            unique.push(trimmed.to_string());
        }
    }

    unique
}

/// Deduplicates strings case-insensitively, keeping first-seen order.
///
/// Missing (`None`) and blank entries are dropped and every kept entry is
/// trimmed. When entries differ only by case, the casing of the first one
/// wins.
///
/// # Examples
///
/// ```
/// use catid_core::unique_strings;
/// let names = [None, Some("a"), None, Some("b"), Some(" A ")];
/// assert_eq!(unique_strings(names), vec!["a", "b"]);
/// ```
pub fn unique_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    unique_by(items, str::to_lowercase)
}

/// Deduplicates identifiers that resolve to the same canonical key.
///
/// Same contract as [`unique_strings`], except that "NGC 7000", "NGC7000"
/// and "ngc 7000" count as one entry.
pub fn unique_identifiers<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    unique_by(items, normalize_catalog_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_identifiers_collapses_spelling_variants() {
        let names = ["NGC 7000", "North America Nebula", "NGC7000", "ngc 7000", "Caldwell 20"];
        assert_eq!(
            unique_identifiers(names.iter().map(Some)),
            vec!["NGC 7000", "North America Nebula", "Caldwell 20"]
        );
    }

    #[test]
    fn test_unique_strings_keeps_spelling_variants() {
        let names = ["NGC 7000", "NGC7000"];
        assert_eq!(unique_strings(names.iter().map(Some)).len(), 2);
    }
}
