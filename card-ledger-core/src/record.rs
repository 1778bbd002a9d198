//! The canonical card record all imports normalize into.

use serde::{Deserialize, Serialize};

/// Third-party grading service that certified a card, or `Raw` for an
/// uncertified card.
///
/// Vendor exports spell these many ways ("Beckett", "ungraded", "none");
/// [`GradingCompany::parse`] folds the synonyms. Services we have no
/// synonym entry for are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradingCompany {
    Raw,
    Psa,
    Bgs,
    Cgc,
    Sgc,
    Ace,
    Tag,
    Other(String),
}

impl GradingCompany {
    /// Map a vendor spelling to a grading company.
    ///
    /// Empty strings and "ungraded"/"none"/"raw" style values all collapse
    /// to the `Raw` sentinel.
    pub fn parse(value: &str) -> Self {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "" | "raw" | "ungraded" | "none" | "not graded" | "no" | "n/a" | "-" => Self::Raw,
            "psa" => Self::Psa,
            "bgs" | "beckett" | "bgs/beckett" => Self::Bgs,
            "cgc" => Self::Cgc,
            "sgc" => Self::Sgc,
            "ace" | "ace grading" => Self::Ace,
            "tag" => Self::Tag,
            _ => Self::Other(value.trim().to_string()),
        }
    }

    /// Canonical lowercase identifier ("psa", "raw", ...).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Raw => "raw",
            Self::Psa => "psa",
            Self::Bgs => "bgs",
            Self::Cgc => "cgc",
            Self::Sgc => "sgc",
            Self::Ace => "ace",
            Self::Tag => "tag",
            Self::Other(name) => name,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw)
    }
}

impl From<String> for GradingCompany {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<GradingCompany> for String {
    fn from(value: GradingCompany) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for GradingCompany {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inventory category of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A loose, uncertified single.
    #[default]
    Raw,
    /// A slabbed, professionally graded single.
    Graded,
    /// Sealed product (booster box, ETB, ...).
    Sealed,
}

impl Category {
    /// Parse an explicit category value from an export.
    ///
    /// Returns `None` for unrecognized values so the caller can fall back
    /// to inferring the category from the grading company.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "raw" | "single" | "singles" | "card" | "cards" => Some(Self::Raw),
            "graded" | "slab" | "slabbed" | "slabs" => Some(Self::Graded),
            "sealed" | "box" | "booster box" | "etb" | "pack" | "sealed product" => {
                Some(Self::Sealed)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Graded => "graded",
            Self::Sealed => "sealed",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical record a single imported row normalizes into.
///
/// Built once by the row normalizer and never mutated afterward —
/// corrections happen by re-import. `source_row` points back into the
/// immutable raw table the record came from, for audit and debugging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name. May be empty when the input row had none; the validator
    /// flags such rows as errors.
    pub name: String,
    pub set_name: Option<String>,
    /// Card number exactly as imported (e.g. "146/132", "#4").
    pub card_number: Option<String>,
    /// Canonical short form of the number (e.g. "146", "SV049").
    pub normalized_number: Option<String>,
    /// Number of copies. Always positive; defaults to 1.
    pub quantity: u32,
    /// What was paid for the card. `Some(0.0)` when the export carried no
    /// purchase data at all; `None` when a value was present but unparsable.
    pub purchase_price: Option<f64>,
    pub market_price: Option<f64>,
    pub condition: Option<String>,
    pub grading_company: GradingCompany,
    pub grade: Option<String>,
    pub rarity: Option<String>,
    pub category: Category,
    pub language: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub cert_number: Option<String>,
    /// Index of the raw row this record was normalized from.
    pub source_row: usize,
}

impl CardRecord {
    /// An empty record for the given source row, with all defaults applied.
    pub fn empty(source_row: usize) -> Self {
        Self {
            name: String::new(),
            set_name: None,
            card_number: None,
            normalized_number: None,
            quantity: 1,
            purchase_price: None,
            market_price: None,
            condition: None,
            grading_company: GradingCompany::Raw,
            grade: None,
            rarity: None,
            category: Category::Raw,
            language: None,
            notes: None,
            image_url: None,
            cert_number: None,
            source_row,
        }
    }

    /// Lowercased `name|set|number` composite key used for duplicate
    /// detection within and across imports.
    pub fn identity_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.name.trim().to_lowercase(),
            self.set_name.as_deref().unwrap_or("").trim().to_lowercase(),
            self.normalized_number
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_lowercase(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grading_company_synonyms() {
        assert_eq!(GradingCompany::parse("PSA"), GradingCompany::Psa);
        assert_eq!(GradingCompany::parse("Beckett"), GradingCompany::Bgs);
        assert_eq!(GradingCompany::parse("ungraded"), GradingCompany::Raw);
        assert_eq!(GradingCompany::parse("None"), GradingCompany::Raw);
        assert_eq!(GradingCompany::parse(""), GradingCompany::Raw);
        assert_eq!(
            GradingCompany::parse("Rare Edition"),
            GradingCompany::Other("Rare Edition".to_string())
        );
    }

    #[test]
    fn category_parse_falls_back_to_none() {
        assert_eq!(Category::parse("Slabbed"), Some(Category::Graded));
        assert_eq!(Category::parse("Booster Box"), Some(Category::Sealed));
        assert_eq!(Category::parse("mystery"), None);
    }

    #[test]
    fn identity_key_is_case_insensitive() {
        let mut a = CardRecord::empty(0);
        a.name = "Charizard".to_string();
        a.set_name = Some("Base Set".to_string());
        a.normalized_number = Some("4".to_string());

        let mut b = CardRecord::empty(7);
        b.name = "CHARIZARD".to_string();
        b.set_name = Some("base set".to_string());
        b.normalized_number = Some("4".to_string());

        assert_eq!(a.identity_key(), b.identity_key());
    }
}
