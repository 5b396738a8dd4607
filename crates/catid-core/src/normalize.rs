// Rust guideline compliant 2026-10-19

//! Token normalization for raw identifier strings.
//!
//! These functions know nothing about catalogs; they only canonicalize
//! whitespace, dash variants and case.

use once_cell::sync::Lazy;
use regex::Regex;

static HYPHEN_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?- ?").expect("hyphen spacing regex must compile"));

/// Returns true for unicode dash variants that stand in for an ASCII hyphen.
fn is_dash_variant(c: char) -> bool {
    matches!(
        c,
        '\u{2010}' // hyphen
            | '\u{2011}' // non-breaking hyphen
            | '\u{2012}' // figure dash
            | '\u{2013}' // en dash
            | '\u{2014}' // em dash
            | '\u{2015}' // horizontal bar
            | '\u{2212}' // minus sign
            | '\u{FE58}' // small em dash
            | '\u{FE63}' // small hyphen-minus
            | '\u{FF0D}' // fullwidth hyphen-minus
    )
}

/// Trims the input and collapses every whitespace run to one ASCII space.
///
/// # Examples
///
/// ```
/// use catid_core::normalize_whitespace;
/// assert_eq!(normalize_whitespace("  NGC \t 7000 "), "NGC 7000");
/// assert_eq!(normalize_whitespace(" \n "), "");
/// ```
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes whitespace and dashes so catalog patterns see one spelling.
///
/// Unicode dash variants become `-`, and spaces touching a hyphen are
/// dropped, so `"T – 1"` becomes `"T-1"`.
pub fn normalize_identifier_token(s: &str) -> String {
    let collapsed = normalize_whitespace(s);
    let dashed: String = collapsed
        .chars()
        .map(|c| if is_dash_variant(c) { '-' } else { c })
        .collect();
    HYPHEN_SPACING.replace_all(&dashed, "-").into_owned()
}

/// Builds the generic canonical form used when no catalog matches.
pub fn build_canonical_id(s: &str) -> String {
    normalize_identifier_token(s).to_uppercase()
}
