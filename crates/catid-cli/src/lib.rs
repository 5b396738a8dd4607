// Rust guideline compliant 2026-10-19

//! Catid CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod resolution;
pub mod settings;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use resolution::{resolve_batch, Resolution};
pub use settings::{load_config, select_format};
pub use terminal::should_use_color;
