// Rust guideline compliant 2026-10-19

//! Integration tests for CLI configuration loading.

use catid_cli::{create_formatter, load_config, select_format};
use catid_core::OutputFormat;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_sets_format_and_dedup() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catid.toml");
    fs::write(&path, "output_format = \"plain\"\ncanonical_dedup = true\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert!(config.canonical_dedup);
    assert_eq!(select_format(None, Some(&config)), "plain");
    assert_eq!(select_format(Some(OutputFormat::Json), Some(&config)), "json");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config(Some(&temp_dir.path().join("absent.toml"))).unwrap();
    assert!(!config.canonical_dedup);
    assert_eq!(select_format(None, Some(&config)), "table");
}

#[test]
fn test_invalid_config_error_renders_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catid.toml");
    fs::write(&path, "output_format = [").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to load config"));
    assert!(message.contains("Invalid config"));

    let formatter = create_formatter(select_format(Some(OutputFormat::Json), None), false);
    let rendered = formatter.format_error(&message);
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["error"], message.as_str());
}
