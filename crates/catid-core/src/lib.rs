// Rust guideline compliant 2026-10-19

//! Catid Core Library
//!
//! Resolution of free-form astronomical object identifiers ("M31",
//! "NGC 7000", "Sh2-155", "GAIA DR3 4295806720") into canonical,
//! catalog-qualified identifiers:
//! - Token normalization (whitespace, unicode dashes)
//! - Per-catalog pattern matchers with a fixed priority order
//! - Resolution and normalization facades
//! - Alias list deduplication
//! - Configuration and error types
//!
//! Every resolution function is pure and may be called from any thread.

pub mod config;
pub mod dedup;
pub mod error;
pub mod matchers;
pub mod models;
pub mod normalize;
pub mod resolve;

pub use config::{Config, OutputFormat};
pub use dedup::{unique_identifiers, unique_strings};
pub use error::{Error, Result};
pub use matchers::match_catalog;
pub use models::{Catalog, CatalogKind, CatalogMatch};
pub use normalize::{build_canonical_id, normalize_identifier_token, normalize_whitespace};
pub use resolve::{identifiers_equivalent, normalize_catalog_identifier, parse_catalog_identifier};
