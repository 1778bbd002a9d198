//! Semantic column types and the mapping produced by the column classifier.
//!
//! Every input column ends up with exactly one [`ColumnMapping`]. The
//! classifier guarantees that at most one mapping per analysis holds a given
//! non-`Unknown` [`ColumnType`], so downstream code can look fields up by
//! type without ambiguity.

use serde::{Deserialize, Serialize};

/// The semantic meaning of an input column.
///
/// This enum centralizes field identity — display names, price/identity
/// classification — in one place, replacing ad-hoc header-string matching
/// throughout the codebase. The row normalizer matches exhaustively on it,
/// so adding a variant is a compile-time-checked change everywhere the type
/// is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Name,
    SetName,
    CardNumber,
    Quantity,
    PurchasePrice,
    MarketPrice,
    Condition,
    GradingCompany,
    Grade,
    Rarity,
    Category,
    Language,
    Notes,
    ImageUrl,
    CertNumber,
    Unknown,
}

/// All assignable column types, in claim-priority order.
///
/// `Unknown` is deliberately absent — it is the fallback, never a claim.
pub const ASSIGNABLE_TYPES: &[ColumnType] = &[
    ColumnType::Name,
    ColumnType::SetName,
    ColumnType::CardNumber,
    ColumnType::Quantity,
    ColumnType::PurchasePrice,
    ColumnType::MarketPrice,
    ColumnType::Condition,
    ColumnType::GradingCompany,
    ColumnType::Grade,
    ColumnType::Rarity,
    ColumnType::Category,
    ColumnType::Language,
    ColumnType::Notes,
    ColumnType::ImageUrl,
    ColumnType::CertNumber,
];

impl ColumnType {
    /// Human-readable label used in CLI tables and warnings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Name => "card name",
            Self::SetName => "set name",
            Self::CardNumber => "card number",
            Self::Quantity => "quantity",
            Self::PurchasePrice => "purchase price",
            Self::MarketPrice => "market price",
            Self::Condition => "condition",
            Self::GradingCompany => "grading company",
            Self::Grade => "grade",
            Self::Rarity => "rarity",
            Self::Category => "category",
            Self::Language => "language",
            Self::Notes => "notes",
            Self::ImageUrl => "image URL",
            Self::CertNumber => "certificate number",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this type carries a currency amount.
    pub fn is_price(&self) -> bool {
        matches!(self, Self::PurchasePrice | Self::MarketPrice)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which classification tier produced a column's type assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// Exact dictionary hit on the header string.
    Exact,
    /// Header prefix or fuzzy keyword match.
    Pattern,
    /// Inferred from sampled column values.
    Data,
    /// Supplied by the caller, overriding detection.
    Manual,
    /// Nothing matched.
    None,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Exact => "exact",
            Self::Pattern => "pattern",
            Self::Data => "data",
            Self::Manual => "manual",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

/// The classifier's verdict for a single input column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Header string exactly as it appeared in the input.
    pub header: String,
    /// Zero-based position of the column in the input.
    pub index: usize,
    /// Detected semantic type, `Unknown` if nothing matched or the claim
    /// was lost during conflict resolution.
    pub column_type: ColumnType,
    /// Confidence in the assignment, in `[0, 1]`.
    pub confidence: f64,
    /// Which tier produced the assignment.
    pub method: DetectionMethod,
}

impl ColumnMapping {
    /// A mapping for a column nothing could classify.
    pub fn unknown(header: impl Into<String>, index: usize) -> Self {
        Self {
            header: header.into(),
            index,
            column_type: ColumnType::Unknown,
            confidence: 0.0,
            method: DetectionMethod::None,
        }
    }

    /// Demote this mapping to `Unknown` after losing a claim conflict.
    pub fn demote(&mut self) {
        self.column_type = ColumnType::Unknown;
        self.confidence = 0.0;
        self.method = DetectionMethod::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignable_types_excludes_unknown() {
        assert!(!ASSIGNABLE_TYPES.contains(&ColumnType::Unknown));
        assert_eq!(ASSIGNABLE_TYPES.len(), 15);
    }

    #[test]
    fn demote_clears_claim() {
        let mut mapping = ColumnMapping {
            header: "Price".to_string(),
            index: 3,
            column_type: ColumnType::MarketPrice,
            confidence: 0.75,
            method: DetectionMethod::Pattern,
        };
        mapping.demote();
        assert_eq!(mapping.column_type, ColumnType::Unknown);
        assert_eq!(mapping.confidence, 0.0);
        assert_eq!(mapping.method, DetectionMethod::None);
    }
}
