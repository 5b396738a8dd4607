// Rust guideline compliant 2026-10-19

//! Per-catalog identifier recognizers.
//!
//! Each catalog family owns one anchored, case-insensitive pattern and a
//! shape describing what to extract from it. Matchers expect a token that
//! already went through [`crate::normalize_identifier_token`]: single
//! spaces, ASCII hyphens, no spaces around hyphens.
//!
//! The order in which matchers are tried lives in
//! [`Catalog::RESOLUTION_ORDER`], not here.

use crate::models::{Catalog, CatalogMatch};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// What a rule extracts from its captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `n` holds the running number.
    Number,
    /// `n` holds the running number, `suffix` an optional letter.
    NumberWithSuffix,
    /// `token` (or `bare`) holds the opaque identifier.
    Token,
}

struct Rule {
    catalog: Catalog,
    pattern: String,
    shape: Shape,
}

/// Letters captured into a match are ASCII only; Unicode case folding would
/// let signs such as U+212A KELVIN SIGN through as a suffix.
const LETTER: &str = r"(?-u:[A-Z])";

/// Coordinates of a J/B pulsar name, e.g. `0437-4715`, `1919+21`, `1748-2446ad`.
static PULSAR_BODY: Lazy<String> =
    Lazy::new(|| format!(r"[0-9]+(?:\.[0-9]+)?[+-][0-9]+(?:\.[0-9]+)?{LETTER}*"));

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    // Between a prefix and its number: one space, one hyphen, or nothing.
    vec![
        numbered(Catalog::Messier, r"(?:MESSIER|M)"),
        Rule {
            catalog: Catalog::Ngc,
            pattern: format!(r"^(?:NGC|N)[ -]?(?P<n>[0-9]+) ?(?P<suffix>{LETTER})?$"),
            shape: Shape::NumberWithSuffix,
        },
        Rule {
            catalog: Catalog::Ic,
            pattern: format!(r"^IC[ -]?(?P<n>[0-9]+) ?(?P<suffix>{LETTER})?$"),
            shape: Shape::NumberWithSuffix,
        },
        // The "2" must be followed by a separator so "SH2155" stays ambiguous.
        Rule {
            catalog: Catalog::Sharpless,
            pattern: r"^(?:SH ?2|SHARPLESS(?: ?2)?)[ -](?P<n>[0-9]+)$".to_string(),
            shape: Shape::Number,
        },
        // CROLLINDER is an accepted misspelling found in imported lists.
        numbered(Catalog::Collinder, r"(?:COLLINDER|CROLLINDER|CR)"),
        numbered(Catalog::Caldwell, r"(?:CALDWELL|C)"),
        numbered(Catalog::Barnard, r"(?:BARNARD|B)"),
        numbered(Catalog::Abell, r"ABELL"),
        numbered(Catalog::Melotte, r"(?:MELOTTE|MEL)"),
        numbered(Catalog::Trumpler, r"(?:TRUMPLER|TR)"),
        numbered(Catalog::VanDenBergh, r"VD ?B"),
        numbered(Catalog::Ldn, r"LDN"),
        numbered(Catalog::Lbn, r"LBN"),
        numbered(Catalog::Pgc, r"PGC"),
        numbered(Catalog::Ugc, r"UGC"),
        numbered(Catalog::Hd, r"HD"),
        numbered(Catalog::Hip, r"HIP"),
        numbered(Catalog::Sao, r"SAO"),
        Rule {
            catalog: Catalog::Gaia,
            pattern: r"^GAIA(?:[ -]?(?:E?DR[1-3]|SOURCE))?[ -]?(?P<token>[0-9]+)$".to_string(),
            shape: Shape::Token,
        },
        Rule {
            catalog: Catalog::Tycho,
            pattern: r"^TYC[ -]?(?P<token>[0-9]+-[0-9]+-[0-9]+)$".to_string(),
            shape: Shape::Token,
        },
        Rule {
            catalog: Catalog::TwoMass,
            pattern: r"^2MASS[ -]?J?(?P<token>[0-9]{8}[+-][0-9]{7})$".to_string(),
            shape: Shape::Token,
        },
        // Bare J names default to PSR, 2MASS-style ones included; B names
        // need the prefix.
        Rule {
            catalog: Catalog::Pulsar,
            pattern: format!(
                r"^(?:PSR[ -]?(?P<token>(?-u:[JB]){body})|(?P<bare>(?-u:J){body}))$",
                body = PULSAR_BODY.as_str()
            ),
            shape: Shape::Token,
        },
    ]
});

static COMPILED: Lazy<HashMap<Catalog, (Shape, Regex)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(&format!("(?i){}", rule.pattern))
                .expect("catalog pattern must compile");
            (rule.catalog, (rule.shape, regex))
        })
        .collect()
});

/// Builds the common `PREFIX[ -]?NUMBER` rule.
fn numbered(catalog: Catalog, prefix: &str) -> Rule {
    Rule {
        catalog,
        pattern: format!(r"^{}[ -]?(?P<n>[0-9]+)$", prefix),
        shape: Shape::Number,
    }
}

/// Parses a positive running number; zero and overflow are not matches.
fn positive_number(caps: &Captures<'_>) -> Option<u32> {
    let number: u32 = caps.name("n")?.as_str().parse().ok()?;
    (number > 0).then_some(number)
}

/// Tries a single catalog's matcher against a normalized token.
///
/// # Arguments
///
/// * `catalog` - The catalog family to test
/// * `token` - Output of [`crate::normalize_identifier_token`]
///
/// # Returns
///
/// The structured match, or `None` if the token is not in this catalog's
/// syntax.
pub fn match_catalog(catalog: Catalog, token: &str) -> Option<CatalogMatch> {
    let (shape, regex) = COMPILED.get(&catalog)?;
    let caps = regex.captures(token)?;

    match shape {
        Shape::Number => Some(CatalogMatch::numbered(catalog, positive_number(&caps)?, None)),
        Shape::NumberWithSuffix => {
            let suffix = caps.name("suffix").map(|m| m.as_str().to_uppercase());
            Some(CatalogMatch::numbered(catalog, positive_number(&caps)?, suffix))
        }
        Shape::Token => {
            let token = caps.name("token").or_else(|| caps.name("bare"))?;
            Some(CatalogMatch::tokenized(catalog, token.as_str().to_uppercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_has_a_rule() {
        for catalog in Catalog::RESOLUTION_ORDER {
            assert!(COMPILED.contains_key(&catalog), "missing rule for {}", catalog);
        }
        assert_eq!(RULES.len(), Catalog::RESOLUTION_ORDER.len());
    }

    #[test]
    fn test_token_rules_match_token_catalogs() {
        for rule in RULES.iter() {
            assert_eq!(
                rule.shape == Shape::Token,
                !rule.catalog.is_numbered(),
                "shape mismatch for {}",
                rule.catalog
            );
        }
    }

    #[test]
    fn test_messier_forms() {
        for input in ["M31", "M 31", "m31", "MESSIER 31", "Messier-31", "M031"] {
            let m = match_catalog(Catalog::Messier, input).unwrap();
            assert_eq!(m.number(), Some(31), "input {input}");
            assert_eq!(m.normalized(), "M31");
        }
    }

    #[test]
    fn test_zero_is_not_a_number() {
        assert!(match_catalog(Catalog::Messier, "M0").is_none());
        assert!(match_catalog(Catalog::Ngc, "NGC 000").is_none());
    }

    #[test]
    fn test_overflow_is_not_a_match() {
        assert!(match_catalog(Catalog::Pgc, "PGC 99999999999").is_none());
    }

    #[test]
    fn test_ngc_suffix_is_uppercased() {
        let m = match_catalog(Catalog::Ngc, "ngc 4038a").unwrap();
        assert_eq!(m.suffix(), Some("A"));
        assert_eq!(m.normalized(), "NGC4038A");
    }

    #[test]
    fn test_ngc_shorthand() {
        let m = match_catalog(Catalog::Ngc, "N 224").unwrap();
        assert_eq!(m.normalized(), "NGC224");
    }

    #[test]
    fn test_sharpless_requires_separator_after_two() {
        assert_eq!(match_catalog(Catalog::Sharpless, "SH 2 155").unwrap().number(), Some(155));
        assert_eq!(match_catalog(Catalog::Sharpless, "Sh2-155").unwrap().number(), Some(155));
        assert_eq!(match_catalog(Catalog::Sharpless, "SHARPLESS 240").unwrap().number(), Some(240));
        assert_eq!(
            match_catalog(Catalog::Sharpless, "SHARPLESS 2-240").unwrap().number(),
            Some(240)
        );
        assert!(match_catalog(Catalog::Sharpless, "SH2155").is_none());
    }

    #[test]
    fn test_caldwell_does_not_claim_collinder() {
        assert!(match_catalog(Catalog::Caldwell, "Cr 399").is_none());
        assert!(match_catalog(Catalog::Caldwell, "CROLLINDER 261").is_none());
        assert_eq!(match_catalog(Catalog::Caldwell, "C49").unwrap().normalized(), "C49");
    }

    #[test]
    fn test_crollinder_alias() {
        let m = match_catalog(Catalog::Collinder, "CROLLINDER 261").unwrap();
        assert_eq!(m.normalized(), "Cr261");
    }

    #[test]
    fn test_van_den_bergh_spacing() {
        assert_eq!(match_catalog(Catalog::VanDenBergh, "VD B 1").unwrap().normalized(), "vdB1");
        assert_eq!(match_catalog(Catalog::VanDenBergh, "vdB152").unwrap().normalized(), "vdB152");
    }

    #[test]
    fn test_gaia_releases() {
        for input in [
            "GAIA DR3 4295806720",
            "Gaia DR2 4295806720",
            "GAIA EDR3 4295806720",
            "GAIA SOURCE 4295806720",
            "Gaia 4295806720",
        ] {
            let m = match_catalog(Catalog::Gaia, input).unwrap();
            assert_eq!(m.token(), Some("4295806720"), "input {input}");
            assert_eq!(m.number(), None);
        }
    }

    #[test]
    fn test_two_mass_strips_j() {
        let with_j = match_catalog(Catalog::TwoMass, "2MASS J06495091-0737408").unwrap();
        let without = match_catalog(Catalog::TwoMass, "2MASS 06495091-0737408").unwrap();
        assert_eq!(with_j.token(), Some("06495091-0737408"));
        assert_eq!(with_j, without);
        assert_eq!(with_j.normalized(), "2MASS J06495091-0737408");
    }

    #[test]
    fn test_pulsar_names() {
        let prefixed = match_catalog(Catalog::Pulsar, "psr j0437-4715").unwrap();
        assert_eq!(prefixed.token(), Some("J0437-4715"));
        let bare = match_catalog(Catalog::Pulsar, "J1939+2134").unwrap();
        assert_eq!(bare.token(), Some("J1939+2134"));
        let b_name = match_catalog(Catalog::Pulsar, "PSR B1919+21").unwrap();
        assert_eq!(b_name.normalized(), "PSR B1919+21");
        assert!(match_catalog(Catalog::Pulsar, "B1919+21").is_none());
    }

    #[test]
    fn test_bare_two_mass_style_name_is_a_pulsar() {
        let m = match_catalog(Catalog::Pulsar, "J06495091-0737408").unwrap();
        assert_eq!(m.normalized(), "PSR J06495091-0737408");
    }

    #[test]
    fn test_pulsar_multi_letter_designator() {
        let m = match_catalog(Catalog::Pulsar, "J1748-2446ad").unwrap();
        assert_eq!(m.token(), Some("J1748-2446AD"));
        let dotted = match_catalog(Catalog::Pulsar, "PSR J1959+20.8").unwrap();
        assert_eq!(dotted.normalized(), "PSR J1959+20.8");
    }

    #[test]
    fn test_suffix_letters_are_ascii() {
        assert!(match_catalog(Catalog::Ngc, "NGC 4038\u{212A}").is_none());
        assert!(match_catalog(Catalog::Ic, "IC 2118\u{212A}").is_none());
        assert!(match_catalog(Catalog::Pulsar, "J1748-2446\u{212A}").is_none());
        assert_eq!(match_catalog(Catalog::Ngc, "NGC 4038K").unwrap().suffix(), Some("K"));
    }
}
