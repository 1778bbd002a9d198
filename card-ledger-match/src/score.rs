//! Per-signal scoring of one imported record against one catalog candidate.
//!
//! The total is the sum of four independently computed signals plus
//! combination bonuses. Bonuses exist because independent partial matches
//! across unrelated fields are a much stronger identity signal than any
//! single field alone.

use card_ledger_catalog::CatalogCard;
use card_ledger_core::{CardRecord, normalize_card_number, rarity_group};

use crate::normalize::{normalize_name, normalize_set_name, similarity, tokens_contained};

// Name signal tiers
pub const NAME_EXACT: u32 = 50;
pub const NAME_CONTAINS: u32 = 35;
pub const NAME_FUZZY: u32 = 25;
pub const NAME_TOKENS: u32 = 15;
const NAME_FUZZY_THRESHOLD: f64 = 0.8;

// Set signal tiers
pub const SET_EXACT: u32 = 25;
pub const SET_CONTAINS: u32 = 18;
pub const SET_FUZZY: u32 = 12;
const SET_FUZZY_THRESHOLD: f64 = 0.7;

// Number signal tiers
pub const NUMBER_EXACT: u32 = 20;
pub const NUMBER_NUMERIC: u32 = 15;

// Rarity signal tiers
pub const RARITY_EXACT: u32 = 10;
pub const RARITY_SYNONYM: u32 = 6;

// Combination bonuses
pub const BONUS_NAME_SET_NUMBER: u32 = 25;
pub const BONUS_NAME_NUMBER: u32 = 15;
pub const BONUS_NAME_SET: u32 = 10;

/// Per-signal breakdown of a candidate's score.
#[derive(Debug, Clone, Default)]
pub struct ScoreBreakdown {
    pub name_score: u32,
    pub set_score: u32,
    pub number_score: u32,
    pub rarity_score: u32,
    /// Labels of the combination bonuses that applied.
    pub bonuses: Vec<&'static str>,
    pub bonus_score: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.name_score + self.set_score + self.number_score + self.rarity_score
            + self.bonus_score
    }
}

/// Score one candidate against one imported record.
pub fn score_candidate(record: &CardRecord, candidate: &CatalogCard) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        name_score: score_name(&record.name, &candidate.name),
        set_score: score_set(record.set_name.as_deref(), candidate.set_name()),
        number_score: score_number(
            record.normalized_number.as_deref(),
            candidate.number.as_deref(),
        ),
        rarity_score: score_rarity(record.rarity.as_deref(), candidate.rarity.as_deref()),
        ..Default::default()
    };

    // Only the largest applicable bonus is added
    if breakdown.name_score > 0 && breakdown.set_score > 0 && breakdown.number_score > 0 {
        breakdown.bonuses.push("name+set+number");
        breakdown.bonus_score = BONUS_NAME_SET_NUMBER;
    } else if breakdown.name_score > 0 && breakdown.number_score > 0 {
        breakdown.bonuses.push("name+number");
        breakdown.bonus_score = BONUS_NAME_NUMBER;
    } else if breakdown.name_score > 0 && breakdown.set_score > 0 {
        breakdown.bonuses.push("name+set");
        breakdown.bonus_score = BONUS_NAME_SET;
    }

    breakdown
}

/// Name tiers: exact, containment either way, edit similarity, token-set
/// containment.
fn score_name(imported: &str, candidate: &str) -> u32 {
    let a = normalize_name(imported);
    let b = normalize_name(candidate);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    if a == b {
        NAME_EXACT
    } else if a.contains(&b) || b.contains(&a) {
        NAME_CONTAINS
    } else if similarity(&a, &b) >= NAME_FUZZY_THRESHOLD {
        NAME_FUZZY
    } else if tokens_contained(&a, &b) {
        NAME_TOKENS
    } else {
        0
    }
}

/// Set tiers mirror the name tiers at lower weights. No imported set name
/// means no signal at all.
fn score_set(imported: Option<&str>, candidate: Option<&str>) -> u32 {
    let (Some(imported), Some(candidate)) = (imported, candidate) else {
        return 0;
    };
    let a = normalize_set_name(imported);
    let b = normalize_set_name(candidate);
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    if a == b {
        SET_EXACT
    } else if a.contains(&b) || b.contains(&a) {
        SET_CONTAINS
    } else if similarity(&a, &b) >= SET_FUZZY_THRESHOLD {
        SET_FUZZY
    } else {
        0
    }
}

/// Number tiers: exact after shared normalization, then a digits-only
/// integer comparison that tolerates leading zeros and letter prefixes.
fn score_number(imported_normalized: Option<&str>, candidate: Option<&str>) -> u32 {
    let Some(imported) = imported_normalized else {
        return 0;
    };
    let Some(candidate_normalized) = candidate.and_then(normalize_card_number) else {
        return 0;
    };

    if imported.eq_ignore_ascii_case(&candidate_normalized) {
        return NUMBER_EXACT;
    }

    match (digits_value(imported), digits_value(&candidate_normalized)) {
        (Some(a), Some(b)) if a == b => NUMBER_NUMERIC,
        _ => 0,
    }
}

/// Parse the digit characters of a number as an integer, ignoring the rest.
fn digits_value(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Rarity: exact/containment first, then synonym-group equivalence across
/// vendor vocabularies.
fn score_rarity(imported: Option<&str>, candidate: Option<&str>) -> u32 {
    let (Some(imported), Some(candidate)) = (imported, candidate) else {
        return 0;
    };
    let a = imported.trim().to_lowercase();
    let b = candidate.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    if a == b || a.contains(&b) || b.contains(&a) {
        return RARITY_EXACT;
    }
    match (rarity_group(&a), rarity_group(&b)) {
        (Some(ga), Some(gb)) if ga == gb => RARITY_SYNONYM,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, set: Option<&str>, number: Option<&str>) -> CardRecord {
        let mut r = CardRecord::empty(0);
        r.name = name.to_string();
        r.set_name = set.map(String::from);
        r.normalized_number = number.and_then(normalize_card_number);
        r
    }

    fn candidate(name: &str, set: Option<&str>, number: Option<&str>) -> CatalogCard {
        CatalogCard {
            id: "test".to_string(),
            name: name.to_string(),
            set: set.map(|s| card_ledger_catalog::CardSet {
                id: "set".to_string(),
                name: s.to_string(),
                series: None,
                printed_total: None,
                release_date: None,
            }),
            number: number.map(String::from),
            rarity: None,
            images: None,
        }
    }

    #[test]
    fn exact_triple_match_scores_all_signals_and_top_bonus() {
        let breakdown = score_candidate(
            &record("Charizard", Some("Base Set"), Some("4")),
            &candidate("Charizard", Some("Base Set"), Some("4")),
        );
        assert_eq!(breakdown.name_score, NAME_EXACT);
        assert_eq!(breakdown.set_score, SET_EXACT);
        assert_eq!(breakdown.number_score, NUMBER_EXACT);
        assert_eq!(breakdown.bonuses, vec!["name+set+number"]);
        assert_eq!(
            breakdown.total(),
            NAME_EXACT + SET_EXACT + NUMBER_EXACT + BONUS_NAME_SET_NUMBER
        );
    }

    #[test]
    fn adding_a_set_match_strictly_increases_the_total() {
        let name_only = score_candidate(
            &record("Charizard", None, None),
            &candidate("Charizard", Some("Base Set"), None),
        );
        let with_set = score_candidate(
            &record("Charizard", Some("Base Set"), None),
            &candidate("Charizard", Some("Base Set"), None),
        );
        assert!(with_set.total() > name_only.total());
        assert_eq!(with_set.bonuses, vec!["name+set"]);
    }

    #[test]
    fn suffix_styles_compare_equal() {
        let breakdown = score_candidate(
            &record("Charizard-EX", None, None),
            &candidate("Charizard ex", None, None),
        );
        assert_eq!(breakdown.name_score, NAME_EXACT);
    }

    #[test]
    fn containment_and_fuzzy_tiers() {
        assert_eq!(score_name("Dark Charizard", "Charizard"), NAME_CONTAINS);
        assert_eq!(score_name("Charizrd", "Charizard"), NAME_FUZZY);
        assert_eq!(
            score_name("Charizard Dark Holo", "Dark Charizard"),
            NAME_TOKENS
        );
        assert_eq!(score_name("Mew", "Charizard"), 0);
    }

    #[test]
    fn number_tolerates_leading_zeros_and_prefixes() {
        let imported = normalize_card_number("4/102");
        assert_eq!(
            score_number(imported.as_deref(), Some("4")),
            NUMBER_EXACT
        );
        assert_eq!(
            score_number(Some("049"), Some("49")),
            NUMBER_NUMERIC
        );
        assert_eq!(score_number(Some("SV049"), Some("049")), NUMBER_NUMERIC);
        assert_eq!(score_number(Some("4"), Some("12")), 0);
        assert_eq!(score_number(None, Some("4")), 0);
    }

    #[test]
    fn missing_set_scores_zero_not_negative() {
        let breakdown = score_candidate(
            &record("Charizard", None, Some("4")),
            &candidate("Charizard", Some("Base Set"), Some("4")),
        );
        assert_eq!(breakdown.set_score, 0);
        assert_eq!(breakdown.bonuses, vec!["name+number"]);
    }

    #[test]
    fn rarity_synonyms_score_reduced_tier() {
        let mut r = record("Charizard", None, None);
        r.rarity = Some("Rainbow Rare".to_string());
        let mut c = candidate("Charizard", None, None);
        c.rarity = Some("Hyper Rare".to_string());
        let breakdown = score_candidate(&r, &c);
        assert_eq!(breakdown.rarity_score, RARITY_SYNONYM);

        c.rarity = Some("rainbow rare".to_string());
        let breakdown = score_candidate(&r, &c);
        assert_eq!(breakdown.rarity_score, RARITY_EXACT);
    }
}
