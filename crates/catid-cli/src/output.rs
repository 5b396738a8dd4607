// Rust guideline compliant 2026-10-19

//! Output formatting module for the catid CLI.
//!
//! This module provides functionality for formatting resolution results
//! in various output formats (JSON, table, plain text).

use crate::resolution::Resolution;
use catid_core::Catalog;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different output formats.
pub trait OutputFormatter {
    /// Formats structured catalog matches, one per input.
    fn format_matches(&self, resolutions: &[Resolution]) -> String;

    /// Formats the canonical identifier of each input.
    fn format_canonical(&self, resolutions: &[Resolution]) -> String;

    /// Formats a deduplicated name list.
    fn format_names(&self, names: &[String]) -> String;

    /// Formats the supported catalogs in resolution order.
    fn format_catalogs(&self, catalogs: &[Catalog]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// Text for an optional cell.
fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_matches(&self, resolutions: &[Resolution]) -> String {
        let output = json!({
            "results": resolutions,
            "total": resolutions.len(),
            "recognized": resolutions.iter().filter(|r| r.is_recognized()).count(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize results" }).to_string())
    }

    fn format_canonical(&self, resolutions: &[Resolution]) -> String {
        let items: Vec<_> = resolutions
            .iter()
            .map(|r| json!({ "input": r.input, "canonical": r.canonical }))
            .collect();
        serde_json::to_string_pretty(&json!({ "results": items, "total": items.len() }))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize results" }).to_string())
    }

    fn format_names(&self, names: &[String]) -> String {
        serde_json::to_string_pretty(&json!({ "names": names, "total": names.len() }))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize names" }).to_string())
    }

    fn format_catalogs(&self, catalogs: &[Catalog]) -> String {
        let items: Vec<_> = catalogs
            .iter()
            .enumerate()
            .map(|(i, c)| {
                json!({
                    "priority": i + 1,
                    "code": c.code(),
                    "name": c.name(),
                    "kind": c.kind(),
                })
            })
            .collect();
        serde_json::to_string_pretty(&json!({ "catalogs": items }))
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize catalogs" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_matches(&self, resolutions: &[Resolution]) -> String {
        if resolutions.is_empty() {
            return "No identifiers given.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Input", "Catalog", "Number", "Suffix", "Token", "Normalized"]);

        for resolution in resolutions {
            match &resolution.found {
                Some(found) => builder.push_record(vec![
                    resolution.input.clone(),
                    found.catalog().code().to_string(),
                    cell(found.number()),
                    cell(found.suffix()),
                    cell(found.token()),
                    found.normalized().to_string(),
                ]),
                None => builder.push_record(vec![
                    resolution.input.clone(),
                    "-".to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    format!("{} (unrecognized)", resolution.canonical),
                ]),
            }
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_canonical(&self, resolutions: &[Resolution]) -> String {
        if resolutions.is_empty() {
            return "No identifiers given.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Input", "Canonical"]);
        for resolution in resolutions {
            builder.push_record(vec![resolution.input.clone(), resolution.canonical.clone()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_names(&self, names: &[String]) -> String {
        if names.is_empty() {
            return "No names left after deduplication.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Name"]);
        for (i, name) in names.iter().enumerate() {
            builder.push_record(vec![(i + 1).to_string(), name.clone()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_catalogs(&self, catalogs: &[Catalog]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Priority", "Code", "Name", "Kind"]);
        for (i, catalog) in catalogs.iter().enumerate() {
            builder.push_record(vec![
                (i + 1).to_string(),
                catalog.code().to_string(),
                catalog.name().to_string(),
                format!("{:?}", catalog.kind()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats results as tab-separated lines without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_matches(&self, resolutions: &[Resolution]) -> String {
        let mut output = String::new();
        for resolution in resolutions {
            match &resolution.found {
                Some(found) => output.push_str(&format!(
                    "{}\t{}\t{}\t{}\t{}\t{}\n",
                    resolution.input,
                    found.catalog(),
                    cell(found.number()),
                    cell(found.suffix()),
                    cell(found.token()),
                    found.normalized()
                )),
                None => output.push_str(&format!(
                    "{}\t-\t\t\t\t{}\n",
                    resolution.input, resolution.canonical
                )),
            }
        }
        output
    }

    fn format_canonical(&self, resolutions: &[Resolution]) -> String {
        let mut output = String::new();
        for resolution in resolutions {
            output.push_str(&resolution.canonical);
            output.push('\n');
        }
        output
    }

    fn format_names(&self, names: &[String]) -> String {
        let mut output = String::new();
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        output
    }

    fn format_catalogs(&self, catalogs: &[Catalog]) -> String {
        let mut output = String::new();
        for catalog in catalogs {
            output.push_str(&format!("{}\t{}\n", catalog.code(), catalog.name()));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter::new(use_color)),
    }
}
