//! Condition, grading, and rarity vocabularies.
//!
//! These are the value-shape vocabularies shared by the column classifier's
//! data-driven tier (membership predicates over sampled cell values) and the
//! matching engine's rarity scorer (synonym-group equivalence). All tables
//! are compile-time constants; there is no runtime mutation.

use crate::record::GradingCompany;

/// Known condition spellings across vendor exports.
///
/// Covers the common grade ladder (NM/LP/MP/HP/DMG) plus the long forms and
/// a few vendor-specific spellings (Cardmarket's "excellent"/"good").
const CONDITION_VALUES: &[&str] = &[
    "mint",
    "m",
    "near mint",
    "nm",
    "nm-mt",
    "near mint or better",
    "lightly played",
    "lp",
    "light played",
    "excellent",
    "ex",
    "moderately played",
    "mp",
    "played",
    "pl",
    "good",
    "gd",
    "heavily played",
    "hp",
    "poor",
    "damaged",
    "dmg",
    "sealed",
];

/// Rarity synonym groups. Every spelling within a group names the same
/// rarity tier; the matcher treats cross-group values as unrelated.
const RARITY_GROUPS: &[&[&str]] = &[
    &["common", "c"],
    &["uncommon", "uc", "u"],
    &["rare", "r", "non holo rare", "non-holo rare"],
    &[
        "holo rare",
        "rare holo",
        "holofoil rare",
        "holo",
        "holographic",
        "holofoil",
    ],
    &["reverse holo", "reverse holofoil", "reverse"],
    &["double rare", "rr"],
    &[
        "ultra rare",
        "ur",
        "ultra",
        "rare ultra",
        "full art",
        "full art rare",
    ],
    &[
        "secret rare",
        "rare secret",
        "secret",
        "scr",
        "gold rare",
        "gold secret rare",
    ],
    &["hyper rare", "rainbow rare", "hr", "rare rainbow"],
    &["illustration rare", "ir", "alt art", "alternate art"],
    &["special illustration rare", "sir"],
    &["amazing rare", "rare holo amazing"],
    &["radiant rare", "rare radiant"],
    &["shiny rare", "rare shiny", "shining", "baby shiny"],
    &["ace spec rare", "ace spec"],
    &["promo", "promotional", "black star promo", "prerelease promo"],
    &["trainer gallery", "tg"],
];

/// Check if a cell value looks like a condition grade.
pub fn is_condition_value(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    CONDITION_VALUES.contains(&lower.as_str())
}

/// Check if a cell value names a grading company (or a raw-card synonym).
pub fn is_grading_value(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    !matches!(GradingCompany::parse(trimmed), GradingCompany::Other(_))
}

/// Check if a cell value belongs to the rarity vocabulary.
pub fn is_rarity_value(value: &str) -> bool {
    rarity_group(value).is_some()
}

/// The synonym group a rarity spelling belongs to, if any.
///
/// Two spellings with the same group index mean the same rarity tier.
pub fn rarity_group(value: &str) -> Option<usize> {
    let lower = value.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    RARITY_GROUPS
        .iter()
        .position(|group| group.contains(&lower.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_membership() {
        assert!(is_condition_value("Near Mint"));
        assert!(is_condition_value("NM"));
        assert!(is_condition_value(" lightly played "));
        assert!(!is_condition_value("Charizard"));
        assert!(!is_condition_value(""));
    }

    #[test]
    fn grading_membership() {
        assert!(is_grading_value("PSA"));
        assert!(is_grading_value("Beckett"));
        assert!(is_grading_value("raw"));
        assert!(!is_grading_value("Base Set"));
        // Empty is absence of data, not a raw-card claim
        assert!(!is_grading_value(""));
    }

    #[test]
    fn rarity_synonyms_share_a_group() {
        let ultra = rarity_group("Ultra Rare").unwrap();
        assert_eq!(rarity_group("ur"), Some(ultra));
        assert_eq!(rarity_group("Full Art"), Some(ultra));

        let hyper = rarity_group("Hyper Rare").unwrap();
        assert_eq!(rarity_group("Rainbow Rare"), Some(hyper));
        assert_ne!(ultra, hyper);
    }

    #[test]
    fn unknown_rarity_has_no_group() {
        assert_eq!(rarity_group("legendary"), None);
        assert_eq!(rarity_group(""), None);
    }
}
