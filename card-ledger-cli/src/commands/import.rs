//! Entry point for `card-ledger import`.

use std::collections::HashSet;
use std::path::PathBuf;

use card_ledger_core::CardRecord;
use card_ledger_import::{Severity, import_text, valid_records};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::print_warning;
use crate::error::CliError;

/// Run the full import pipeline and report the outcome.
///
/// `existing` optionally points to a JSON export of the current inventory
/// (as written by `--json`) so re-imports can be flagged. `json_out` writes
/// the valid canonical records for downstream tooling.
pub(crate) fn run_import(
    file: PathBuf,
    json_out: Option<PathBuf>,
    existing: Option<PathBuf>,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&file)?;
    let existing_keys = match existing {
        Some(path) => Some(load_identity_keys(&path)?),
        None => None,
    };

    let outcome = import_text(&text, existing_keys.as_ref())?;
    let valid = valid_records(&outcome.records, &outcome.warnings);

    let errors = count_severity(&outcome.warnings, Severity::Error);
    let warnings = count_severity(&outcome.warnings, Severity::Warning);
    let infos = count_severity(&outcome.warnings, Severity::Info);

    println!(
        "Imported {} at {}",
        file.display(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Format:  {}", outcome.analysis.detected_format);
    println!(
        "Rows:    {} total, {} importable",
        outcome.records.len(),
        format!("{}", valid.len()).if_supports_color(Stdout, |t| t.green()),
    );
    println!("Findings: {errors} errors, {warnings} warnings, {infos} info");

    if !outcome.warnings.is_empty() {
        println!();
        for warning in &outcome.warnings {
            print_warning(warning);
        }
    }

    if let Some(path) = json_out {
        let records: Vec<&CardRecord> = valid;
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&path, json)?;
        println!();
        println!("Wrote {} records to {}", records.len(), path.display());
    }

    Ok(())
}

fn count_severity(warnings: &[card_ledger_import::ValidationWarning], severity: Severity) -> usize {
    warnings.iter().filter(|w| w.severity == severity).count()
}

/// Load identity keys from a previous JSON export.
fn load_identity_keys(path: &PathBuf) -> Result<HashSet<String>, CliError> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<CardRecord> = serde_json::from_str(&text)?;
    Ok(records.iter().map(CardRecord::identity_key).collect())
}
