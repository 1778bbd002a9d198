//! card-ledger CLI
//!
//! Command-line interface for importing third-party inventory exports and
//! resolving them against the reference card catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod commands;
mod error;
mod settings;

use commands::match_cmd::MatchArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "card-ledger")]
#[command(about = "Import and match trading-card inventory exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the delimiter and column semantics of an export without importing
    Analyze {
        /// Path to the export file
        file: PathBuf,
    },

    /// Import an export into canonical records
    Import {
        /// Path to the export file
        file: PathBuf,

        /// Write the valid canonical records as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// JSON export of the current inventory, for duplicate detection
        #[arg(long)]
        existing: Option<PathBuf>,
    },

    /// Import an export and match every record against the reference catalog
    Match {
        /// Path to the export file
        file: PathBuf,

        /// Minimum total score a candidate needs to count as a match
        #[arg(long, default_value_t = 30)]
        min_score: u32,

        /// Maximum ranked matches kept per record
        #[arg(long, default_value_t = 5)]
        max_results: usize,

        /// Require a name signal in addition to the minimum score
        #[arg(long)]
        strict: bool,

        /// Concurrent catalog searches
        #[arg(long, default_value_t = 4)]
        concurrency: usize,

        /// Catalog base URL (overrides settings.toml)
        #[arg(long)]
        base_url: Option<String>,

        /// Catalog API key (overrides settings.toml)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// List the known source-format signatures
    Formats,

    /// Store the catalog API key in settings.toml
    SetKey {
        /// The API key to store
        key: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file } => commands::analyze::run_analyze(file),
        Commands::Import {
            file,
            json,
            existing,
        } => commands::import::run_import(file, json, existing),
        Commands::Match {
            file,
            min_score,
            max_results,
            strict,
            concurrency,
            base_url,
            api_key,
        } => commands::match_cmd::run_match(MatchArgs {
            file,
            min_score,
            max_results,
            strict,
            concurrency,
            base_url,
            api_key,
        }),
        Commands::Formats => {
            for name in card_ledger_import::known_formats() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::SetKey { key } => save_key(&key),
    };

    if let Err(err) = result {
        eprintln!(
            "{} {err}",
            "error:".if_supports_color(Stderr, |t| t.red()),
        );
        std::process::exit(1);
    }
}

fn save_key(key: &str) -> Result<(), CliError> {
    settings::save_api_key(key)?;
    println!("Saved API key to {}", settings::settings_path().display());
    Ok(())
}
