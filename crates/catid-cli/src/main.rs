// Rust guideline compliant 2026-10-19

//! Catid CLI Application
//!
//! Command-line interface for the catalog identifier resolution engine.

use anyhow::Result;
use catid_cli::commands::{self, collect_inputs};
use catid_cli::{
    create_formatter, load_config, logging, select_format, should_use_color, OutputFormatter,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "catid",
    version,
    about = "catid: canonical astronomical catalog identifiers",
    long_about = "catid turns free-form object identifiers such as \"M 31\", \"ngc 4038a\" or \"SHARPLESS 240\" into canonical catalog-qualified keys.",
    after_help = "Examples:\n  catid parse \"NGC 4038A\" \"Sh2-155\"\n  catid normalize \"messier 42\" \"Andromeda Galaxy\"\n  catid dedup --canonical \"NGC 7000\" \"ngc7000\" \"North America Nebula\"\n  cat names.txt | catid normalize --strict\n  catid catalogs\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show the structured catalog match of each identifier
    Parse {
        /// Identifiers to resolve ('-' or none reads stdin)
        identifiers: Vec<String>,

        /// Fail if any identifier is not recognized by a catalog
        #[arg(long)]
        strict: bool,
    },

    /// Print the canonical identifier of each input
    Normalize {
        /// Identifiers to normalize ('-' or none reads stdin)
        identifiers: Vec<String>,

        /// Fail if any identifier is not recognized by a catalog
        #[arg(long)]
        strict: bool,
    },

    /// Deduplicate a list of names, keeping first-seen order
    Dedup {
        /// Names to deduplicate ('-' or none reads stdin)
        names: Vec<String>,

        /// Collapse names that share a canonical identifier
        #[arg(long, conflicts_with = "case_only")]
        canonical: bool,

        /// Only collapse names that differ by case (overrides config)
        #[arg(long)]
        case_only: bool,
    },

    /// List supported catalogs in resolution order
    Catalogs,
}

fn main() {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let requested = match cli.format {
        Some(OutputFormat::Json) => Some(catid_core::OutputFormat::Json),
        Some(OutputFormat::Table) => Some(catid_core::OutputFormat::Table),
        Some(OutputFormat::Plain) => Some(catid_core::OutputFormat::Plain),
        None if cli.json => Some(catid_core::OutputFormat::Json),
        None => None,
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let formatter = create_formatter(select_format(requested, None), use_color);
            eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
            std::process::exit(2);
        }
    };
    let formatter = create_formatter(select_format(requested, Some(&config)), use_color);

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let result = logging::init_tracing(log_level)
        .and_then(|()| run(cli.command, &config, formatter.as_ref()));

    if let Err(err) = result {
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        std::process::exit(1);
    }
}

fn run(
    command: Option<Commands>,
    config: &catid_core::Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    match command {
        Some(Commands::Parse {
            identifiers,
            strict,
        }) => {
            commands::parse::execute(collect_inputs(identifiers)?, strict, formatter)?;
        }
        Some(Commands::Normalize {
            identifiers,
            strict,
        }) => {
            commands::normalize::execute(collect_inputs(identifiers)?, strict, formatter)?;
        }
        Some(Commands::Dedup {
            names,
            canonical,
            case_only,
        }) => {
            let canonical = canonical || (config.canonical_dedup && !case_only);
            commands::dedup::execute(collect_inputs(names)?, canonical, formatter);
        }
        Some(Commands::Catalogs) => {
            commands::catalogs::execute(formatter);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
