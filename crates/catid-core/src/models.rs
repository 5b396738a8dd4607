// Rust guideline compliant 2026-10-19

//! Core data models for catalog identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad class of objects a catalog lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Galaxies, nebulae, clusters and dark clouds.
    DeepSky,
    /// Stellar catalogs and surveys.
    Star,
    /// Pulsar designations.
    Pulsar,
}

/// A supported catalog family.
///
/// Serialized as its canonical catalog code (`"M"`, `"NGC"`, `"Sh2"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Catalog {
    /// Messier catalog.
    #[serde(rename = "M")]
    Messier,
    /// New General Catalogue.
    #[serde(rename = "NGC")]
    Ngc,
    /// Index Catalogue.
    #[serde(rename = "IC")]
    Ic,
    /// Caldwell catalog.
    #[serde(rename = "C")]
    Caldwell,
    /// Sharpless HII regions (second catalog).
    #[serde(rename = "Sh2")]
    Sharpless,
    /// Barnard dark nebulae.
    #[serde(rename = "B")]
    Barnard,
    /// Abell galaxy clusters.
    #[serde(rename = "Abell")]
    Abell,
    /// Melotte clusters.
    #[serde(rename = "Mel")]
    Melotte,
    /// Collinder clusters.
    #[serde(rename = "Cr")]
    Collinder,
    /// Trumpler clusters.
    #[serde(rename = "Tr")]
    Trumpler,
    /// van den Bergh reflection nebulae.
    #[serde(rename = "vdB")]
    VanDenBergh,
    /// Lynds Dark Nebulae.
    #[serde(rename = "LDN")]
    Ldn,
    /// Lynds Bright Nebulae.
    #[serde(rename = "LBN")]
    Lbn,
    /// Principal Galaxies Catalogue.
    #[serde(rename = "PGC")]
    Pgc,
    /// Uppsala General Catalogue.
    #[serde(rename = "UGC")]
    Ugc,
    /// Henry Draper catalog.
    #[serde(rename = "HD")]
    Hd,
    /// Hipparcos catalog.
    #[serde(rename = "HIP")]
    Hip,
    /// Smithsonian Astrophysical Observatory star catalog.
    #[serde(rename = "SAO")]
    Sao,
    /// Gaia source identifiers.
    #[serde(rename = "Gaia")]
    Gaia,
    /// Tycho-2 catalog.
    #[serde(rename = "TYC")]
    Tycho,
    /// Two Micron All Sky Survey.
    #[serde(rename = "2MASS")]
    TwoMass,
    /// Pulsar J/B names.
    #[serde(rename = "PSR")]
    Pulsar,
}

impl Catalog {
    /// Catalogs in the order the resolver tries them.
    ///
    /// A pattern that is a special case of another must come first:
    /// Collinder (`Cr`, `Crollinder`) precedes Caldwell (`C`), and the
    /// bare `J` name handled by PSR is always last.
    pub const RESOLUTION_ORDER: [Catalog; 22] = [
        Catalog::Messier,
        Catalog::Ngc,
        Catalog::Ic,
        Catalog::Sharpless,
        Catalog::Collinder,
        Catalog::Caldwell,
        Catalog::Barnard,
        Catalog::Abell,
        Catalog::Melotte,
        Catalog::Trumpler,
        Catalog::VanDenBergh,
        Catalog::Ldn,
        Catalog::Lbn,
        Catalog::Pgc,
        Catalog::Ugc,
        Catalog::Hd,
        Catalog::Hip,
        Catalog::Sao,
        Catalog::Gaia,
        Catalog::Tycho,
        Catalog::TwoMass,
        Catalog::Pulsar,
    ];

    /// Returns the canonical catalog code.
    pub fn code(self) -> &'static str {
        match self {
            Catalog::Messier => "M",
            Catalog::Ngc => "NGC",
            Catalog::Ic => "IC",
            Catalog::Caldwell => "C",
            Catalog::Sharpless => "Sh2",
            Catalog::Barnard => "B",
            Catalog::Abell => "Abell",
            Catalog::Melotte => "Mel",
            Catalog::Collinder => "Cr",
            Catalog::Trumpler => "Tr",
            Catalog::VanDenBergh => "vdB",
            Catalog::Ldn => "LDN",
            Catalog::Lbn => "LBN",
            Catalog::Pgc => "PGC",
            Catalog::Ugc => "UGC",
            Catalog::Hd => "HD",
            Catalog::Hip => "HIP",
            Catalog::Sao => "SAO",
            Catalog::Gaia => "Gaia",
            Catalog::Tycho => "TYC",
            Catalog::TwoMass => "2MASS",
            Catalog::Pulsar => "PSR",
        }
    }

    /// Returns the human-readable family name.
    pub fn name(self) -> &'static str {
        match self {
            Catalog::Messier => "Messier",
            Catalog::Ngc => "New General Catalogue",
            Catalog::Ic => "Index Catalogue",
            Catalog::Caldwell => "Caldwell",
            Catalog::Sharpless => "Sharpless",
            Catalog::Barnard => "Barnard",
            Catalog::Abell => "Abell",
            Catalog::Melotte => "Melotte",
            Catalog::Collinder => "Collinder",
            Catalog::Trumpler => "Trumpler",
            Catalog::VanDenBergh => "van den Bergh",
            Catalog::Ldn => "Lynds Dark Nebulae",
            Catalog::Lbn => "Lynds Bright Nebulae",
            Catalog::Pgc => "Principal Galaxies Catalogue",
            Catalog::Ugc => "Uppsala General Catalogue",
            Catalog::Hd => "Henry Draper",
            Catalog::Hip => "Hipparcos",
            Catalog::Sao => "SAO Star Catalog",
            Catalog::Gaia => "Gaia",
            Catalog::Tycho => "Tycho-2",
            Catalog::TwoMass => "2MASS",
            Catalog::Pulsar => "Pulsar",
        }
    }

    /// Returns the class of objects the catalog lists.
    pub fn kind(self) -> CatalogKind {
        match self {
            Catalog::Hd
            | Catalog::Hip
            | Catalog::Sao
            | Catalog::Gaia
            | Catalog::Tycho
            | Catalog::TwoMass => CatalogKind::Star,
            Catalog::Pulsar => CatalogKind::Pulsar,
            _ => CatalogKind::DeepSky,
        }
    }

    /// Returns true for catalogs identified by a running number.
    pub fn is_numbered(self) -> bool {
        !matches!(
            self,
            Catalog::Gaia | Catalog::Tycho | Catalog::TwoMass | Catalog::Pulsar
        )
    }

    /// Looks up a catalog by its code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownCatalog`] if no catalog uses the code.
    pub fn from_code(code: &str) -> crate::Result<Self> {
        let code = code.trim();
        Self::RESOLUTION_ORDER
            .into_iter()
            .find(|catalog| catalog.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| crate::Error::UnknownCatalog(code.to_string()))
    }

    /// Formats the canonical string for a numbered entry.
    fn format_number(self, number: u32, suffix: Option<&str>) -> String {
        let suffix = suffix.unwrap_or("");
        match self {
            Catalog::Sharpless => format!("Sh2-{}", number),
            Catalog::Hd | Catalog::Hip | Catalog::Sao => format!("{} {}", self.code(), number),
            _ => format!("{}{}{}", self.code(), number, suffix),
        }
    }

    /// Formats the canonical string for a token entry.
    fn format_token(self, token: &str) -> String {
        match self {
            Catalog::TwoMass => format!("2MASS J{}", token),
            _ => format!("{} {}", self.code(), token),
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Catalog {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_code(s)
    }
}

/// A successfully recognized catalog identifier.
///
/// Exactly one of `number` and `token` is present; the two constructors
/// are the only way to build a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogMatch {
    catalog: Catalog,
    number: Option<u32>,
    suffix: Option<String>,
    token: Option<String>,
    normalized: String,
}

impl CatalogMatch {
    /// Creates a match for a number-indexed catalog.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog family
    /// * `number` - Running number of the entry
    /// * `suffix` - Optional component letter ("A" in "NGC 4038A")
    pub fn numbered(catalog: Catalog, number: u32, suffix: Option<String>) -> Self {
        let normalized = catalog.format_number(number, suffix.as_deref());
        Self {
            catalog,
            number: Some(number),
            suffix,
            token: None,
            normalized,
        }
    }

    /// Creates a match for a catalog whose identifier is not a bare integer.
    pub fn tokenized(catalog: Catalog, token: String) -> Self {
        let normalized = catalog.format_token(&token);
        Self {
            catalog,
            number: None,
            suffix: None,
            token: Some(token),
            normalized,
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Canonical display string, also used as lookup key.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Consumes the match, returning its canonical string.
    pub fn into_normalized(self) -> String {
        self.normalized
    }
}

impl fmt::Display for CatalogMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for catalog in Catalog::RESOLUTION_ORDER {
            assert_eq!(Catalog::from_code(catalog.code()).unwrap(), catalog);
        }
    }

    #[test]
    fn test_from_code_ignores_case() {
        assert_eq!("ngc".parse::<Catalog>().unwrap(), Catalog::Ngc);
        assert_eq!("SH2".parse::<Catalog>().unwrap(), Catalog::Sharpless);
        assert_eq!(" 2mass ".parse::<Catalog>().unwrap(), Catalog::TwoMass);
    }

    #[test]
    fn test_from_code_unknown() {
        let err = Catalog::from_code("XYZ").unwrap_err();
        assert_eq!(err.to_string(), "Unknown catalog: XYZ");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Catalog::Ngc.kind(), CatalogKind::DeepSky);
        assert_eq!(Catalog::Hd.kind(), CatalogKind::Star);
        assert_eq!(Catalog::Gaia.kind(), CatalogKind::Star);
        assert_eq!(Catalog::Pulsar.kind(), CatalogKind::Pulsar);
    }

    #[test]
    fn test_numbered_formatting() {
        assert_eq!(CatalogMatch::numbered(Catalog::Messier, 31, None).normalized(), "M31");
        assert_eq!(
            CatalogMatch::numbered(Catalog::Ngc, 4038, Some("A".to_string())).normalized(),
            "NGC4038A"
        );
        assert_eq!(CatalogMatch::numbered(Catalog::Sharpless, 155, None).normalized(), "Sh2-155");
        assert_eq!(CatalogMatch::numbered(Catalog::Hd, 209458, None).normalized(), "HD 209458");
        assert_eq!(CatalogMatch::numbered(Catalog::VanDenBergh, 152, None).normalized(), "vdB152");
    }

    #[test]
    fn test_tokenized_has_no_number() {
        let m = CatalogMatch::tokenized(Catalog::Tycho, "4302-1842-1".to_string());
        assert_eq!(m.number(), None);
        assert_eq!(m.token(), Some("4302-1842-1"));
        assert_eq!(m.normalized(), "TYC 4302-1842-1");
        assert_eq!(m.to_string(), "TYC 4302-1842-1");
    }

    #[test]
    fn test_catalog_serializes_as_code() {
        let json = serde_json::to_string(&Catalog::TwoMass).unwrap();
        assert_eq!(json, "\"2MASS\"");
        let back: Catalog = serde_json::from_str("\"vdB\"").unwrap();
        assert_eq!(back, Catalog::VanDenBergh);
    }
}
