//! Row-level validation warnings.
//!
//! Warnings never abort a batch. `Error` severity excludes the offending
//! row from the importable set; `Warning` and `Info` are attached for the
//! caller's reporting and otherwise ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(s)
    }
}

/// What a validation warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingName,
    MissingSetName,
    DuplicateInBatch,
    DuplicateOfExisting,
    NoPriceData,
    SuspiciousPrice,
    DefaultedPurchasePrice,
}

/// A single finding about one imported row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    /// Index of the raw row the finding is about.
    pub row: usize,
    pub message: String,
    pub severity: Severity,
}

impl ValidationWarning {
    pub fn error(kind: WarningKind, row: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            row,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(kind: WarningKind, row: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            row,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn info(kind: WarningKind, row: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            row,
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}
