//! Entry point for `card-ledger match`.

use std::path::PathBuf;

use card_ledger_catalog::CatalogClient;
use card_ledger_core::CardRecord;
use card_ledger_import::{import_text, valid_records};
use card_ledger_match::{BatchConfig, MatchConfig, batch_match};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tokio::time::Duration;

use crate::error::CliError;
use crate::settings;

/// Options collected from the command line.
pub(crate) struct MatchArgs {
    pub file: PathBuf,
    pub min_score: u32,
    pub max_results: usize,
    pub strict: bool,
    pub concurrency: usize,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Import an export and resolve every record against the reference catalog.
pub(crate) fn run_match(args: MatchArgs) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&args.file)?;
    let outcome = import_text(&text, None)?;
    let records: Vec<CardRecord> = valid_records(&outcome.records, &outcome.warnings)
        .into_iter()
        .cloned()
        .collect();

    if records.is_empty() {
        return Err(CliError::config("no importable records to match"));
    }

    // Flags override the settings file; the client has its own default URL
    let stored = settings::load_catalog_settings();
    let base_url = args.base_url.or(stored.base_url);
    let api_key = args.api_key.or(stored.api_key);
    let client = match base_url {
        Some(url) => CatalogClient::with_base_url(url, api_key)?,
        None => CatalogClient::new(api_key)?,
    };

    let config = BatchConfig {
        match_config: MatchConfig {
            min_score: args.min_score,
            max_results: args.max_results,
            strict: args.strict,
        },
        concurrency: args.concurrency.max(1),
        search_timeout: Duration::from_secs(30),
    };

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Matching {} records against the catalog…", records.len()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let client = &client;
    let batch = runtime.block_on(batch_match(
        &records,
        |name| async move { client.search_cards(&name).await },
        &config,
    ));

    spinner.finish_and_clear();

    for (record, matched) in records.iter().zip(&batch.matches) {
        match matched {
            Some(m) => {
                let set = m.candidate.set_name().unwrap_or("?");
                let number = m.candidate.number.as_deref().unwrap_or("?");
                println!(
                    "{:>4}  {} → {} ({set} #{number}) [{}]",
                    format!("{}", m.score).if_supports_color(Stdout, |t| t.green()),
                    record.name,
                    m.candidate.name,
                    m.candidate.id,
                );
                if !m.breakdown.bonuses.is_empty() {
                    log::debug!("bonuses for \"{}\": {:?}", record.name, m.breakdown.bonuses);
                }
            }
            None => {
                println!(
                    "{:>4}  {} → {}",
                    "—",
                    record.name,
                    "no match".if_supports_color(Stdout, |t| t.red()),
                );
            }
        }
    }

    println!();
    println!(
        "{} of {} records matched ({} searches, {} failed)",
        batch.stats.records_matched,
        records.len(),
        batch.stats.groups_searched,
        batch.stats.search_failures,
    );

    Ok(())
}
