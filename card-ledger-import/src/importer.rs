//! The full import pipeline, wired end to end.
//!
//! Raw text → delimiter detection → table parsing → column classification →
//! row normalization → batch validation. Each stage is independently usable;
//! this module is the convenience path callers usually want.

use std::collections::HashSet;

use card_ledger_core::CardRecord;

use crate::classifier::{AnalysisResult, analyze};
use crate::delimiter::detect_delimiter;
use crate::error::ImportError;
use crate::normalizer::normalize_table;
use crate::table::RawTable;
use crate::validator::{ValidatorOptions, validate_batch_with};
use crate::warning::ValidationWarning;

/// Everything one import run produces.
#[derive(Debug)]
pub struct ImportOutcome {
    /// The parsed input, kept for auditing (records point back into it).
    pub table: RawTable,
    pub analysis: AnalysisResult,
    pub records: Vec<CardRecord>,
    pub warnings: Vec<ValidationWarning>,
}

/// Run the whole pipeline over raw tabular text.
///
/// `existing` optionally carries identity keys of records already in the
/// caller's inventory so re-imports can be flagged.
///
/// Fails only on structural problems: unparsable input or no detectable
/// name column. Row-level problems come back as warnings.
pub fn import_text(
    text: &str,
    existing: Option<&HashSet<String>>,
) -> Result<ImportOutcome, ImportError> {
    import_text_with(text, existing, &ValidatorOptions::default())
}

/// [`import_text`] with explicit validator options.
pub fn import_text_with(
    text: &str,
    existing: Option<&HashSet<String>>,
    options: &ValidatorOptions,
) -> Result<ImportOutcome, ImportError> {
    let delimiter = detect_delimiter(text);
    let table = RawTable::parse(text, delimiter)?;
    let analysis = analyze(&table);

    if !analysis.has_name_column() {
        return Err(ImportError::NoNameColumn(table.headers.join(", ")));
    }

    let mut warnings = Vec::new();
    let records = normalize_table(&table, &analysis.columns, &mut warnings);
    warnings.extend(validate_batch_with(&records, existing, options));

    log::info!(
        "imported {} rows as {} ({} warnings)",
        records.len(),
        analysis.detected_format,
        warnings.len()
    );

    Ok(ImportOutcome {
        table,
        analysis,
        records,
        warnings,
    })
}
