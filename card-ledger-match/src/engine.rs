//! Ranking candidates for one imported record.

use card_ledger_catalog::CatalogCard;
use card_ledger_core::CardRecord;

use crate::score::{ScoreBreakdown, score_candidate};

/// Matching thresholds and limits.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Candidates scoring below this are discarded.
    pub min_score: u32,
    /// Cap on how many ranked matches to return.
    pub max_results: usize,
    /// Require a nonzero name score in addition to the minimum total.
    pub strict: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: 30,
            max_results: 5,
            strict: false,
        }
    }
}

/// One ranked candidate for an imported record. Ephemeral — computed per
/// match call and never persisted.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub candidate: &'a CatalogCard,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Score every candidate and return the ranked matches above the minimum.
///
/// The sort is stable and descending, so equal scores keep discovery
/// order — deterministic, if arbitrary.
pub fn find_all_matches<'a>(
    record: &CardRecord,
    candidates: &'a [CatalogCard],
    config: &MatchConfig,
) -> Vec<MatchResult<'a>> {
    let mut results: Vec<MatchResult<'a>> = candidates
        .iter()
        .filter_map(|candidate| {
            let breakdown = score_candidate(record, candidate);
            let score = breakdown.total();
            log::debug!(
                "\"{}\" vs \"{}\": {} (name {}, set {}, number {}, rarity {})",
                record.name,
                candidate.name,
                score,
                breakdown.name_score,
                breakdown.set_score,
                breakdown.number_score,
                breakdown.rarity_score,
            );
            if score < config.min_score {
                return None;
            }
            if config.strict && breakdown.name_score == 0 {
                return None;
            }
            Some(MatchResult {
                candidate,
                score,
                breakdown,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(config.max_results);
    results
}

/// The single best match, if any candidate clears the bar.
pub fn find_best_match<'a>(
    record: &CardRecord,
    candidates: &'a [CatalogCard],
    config: &MatchConfig,
) -> Option<MatchResult<'a>> {
    find_all_matches(record, candidates, config).into_iter().next()
}
