//! Batch validation of normalized records.
//!
//! Runs over the whole batch rather than row by row so it can see
//! duplicates. Only missing-name findings are blocking; everything else is
//! advisory.

use std::collections::{HashMap, HashSet};

use card_ledger_core::CardRecord;

use crate::warning::{Severity, ValidationWarning, WarningKind};

/// Tunables for batch validation.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Prices above this are flagged as probable data-entry errors.
    /// Never auto-corrected.
    pub high_value_threshold: f64,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            high_value_threshold: 50_000.0,
        }
    }
}

/// Validate a normalized batch with default options.
///
/// `existing` is an optional set of [`CardRecord::identity_key`] values for
/// records already in the caller's inventory, used to flag re-imports.
pub fn validate_batch(
    records: &[CardRecord],
    existing: Option<&HashSet<String>>,
) -> Vec<ValidationWarning> {
    validate_batch_with(records, existing, &ValidatorOptions::default())
}

/// Validate a normalized batch.
pub fn validate_batch_with(
    records: &[CardRecord],
    existing: Option<&HashSet<String>>,
    options: &ValidatorOptions,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    // identity key → first row that used it
    let mut seen: HashMap<String, usize> = HashMap::new();

    for record in records {
        let row = record.source_row;

        if record.name.trim().is_empty() {
            warnings.push(ValidationWarning::error(
                WarningKind::MissingName,
                row,
                "Missing card name; row cannot be imported",
            ));
            continue;
        }

        if record.set_name.is_none() {
            warnings.push(ValidationWarning::info(
                WarningKind::MissingSetName,
                row,
                format!("\"{}\" has no set name; matching accuracy will suffer", record.name),
            ));
        }

        let no_purchase = record.purchase_price.is_none_or(|p| p == 0.0);
        if no_purchase && record.market_price.is_none() {
            warnings.push(ValidationWarning::info(
                WarningKind::NoPriceData,
                row,
                format!("\"{}\" carries no price information", record.name),
            ));
        }

        for (label, price) in [
            ("purchase", record.purchase_price),
            ("market", record.market_price),
        ] {
            if let Some(p) = price
                && p > options.high_value_threshold
            {
                warnings.push(ValidationWarning::warning(
                    WarningKind::SuspiciousPrice,
                    row,
                    format!(
                        "\"{}\" has a {label} price of {p:.2}; probable data-entry error",
                        record.name
                    ),
                ));
            }
        }

        let key = record.identity_key();
        if let Some(set) = existing
            && set.contains(&key)
        {
            warnings.push(ValidationWarning::warning(
                WarningKind::DuplicateOfExisting,
                row,
                format!("\"{}\" already exists in the inventory", record.name),
            ));
        }
        match seen.get(&key) {
            Some(&first_row) => warnings.push(ValidationWarning::info(
                WarningKind::DuplicateInBatch,
                row,
                format!(
                    "\"{}\" duplicates row {} within this import",
                    record.name, first_row
                ),
            )),
            None => {
                seen.insert(key, row);
            }
        }
    }

    warnings
}

/// Records not excluded by a blocking (error-severity) finding.
pub fn valid_records<'a>(
    records: &'a [CardRecord],
    warnings: &[ValidationWarning],
) -> Vec<&'a CardRecord> {
    let blocked: HashSet<usize> = warnings
        .iter()
        .filter(|w| w.severity == Severity::Error)
        .map(|w| w.row)
        .collect();
    records
        .iter()
        .filter(|r| !blocked.contains(&r.source_row))
        .collect()
}
