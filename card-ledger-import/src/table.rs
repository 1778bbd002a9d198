//! Raw parsed form of a tabular export.
//!
//! A [`RawTable`] is produced once per import and is immutable afterward.
//! Rows keep their original string values; all coercion happens later in the
//! row normalizer, so the table stays a faithful record of what the vendor
//! actually exported.

use csv::{ReaderBuilder, Trim};

use crate::delimiter::Delimiter;
use crate::error::ImportError;

/// An ordered header row plus data rows, aligned by column index.
///
/// Rows shorter than the header are padded with empty strings; extra cells
/// beyond the header are dropped. Cell positions therefore always line up
/// with `headers`.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: Delimiter,
}

impl RawTable {
    /// Parse raw text with the given delimiter.
    ///
    /// Uses a flexible reader so ragged rows (a common defect in hand-edited
    /// exports) parse instead of erroring. Returns [`ImportError::EmptyInput`]
    /// when there is no header row or no data at all.
    pub fn parse(text: &str, delimiter: Delimiter) -> Result<Self, ImportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::EmptyInput);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ImportError::EmptyInput);
        }

        Ok(Self {
            headers,
            rows,
            delimiter,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The cell at (row, column), if both indices are in range.
    pub fn value(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(String::as_str)
    }

    /// Up to `limit` non-empty values from one column, in row order.
    ///
    /// Used by the classifier's data-driven tier to sample what a column
    /// actually contains.
    pub fn column_samples(&self, column: usize, limit: usize) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .take(limit)
            .collect()
    }
}
