use thiserror::Error;

/// Errors that can occur while ingesting a tabular export.
///
/// These are the structural failures of the import pipeline — nothing here
/// covers per-row problems, which are reported as validation warnings and
/// never abort a batch.
#[derive(Debug, Error)]
pub enum ImportError {
    /// I/O error while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The raw text could not be parsed as delimited data
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The input had no header row or no data rows
    #[error("Input contains no tabular data")]
    EmptyInput,

    /// No column could be classified as the card name
    #[error("No card-name column detected among headers: {0}")]
    NoNameColumn(String),
}
