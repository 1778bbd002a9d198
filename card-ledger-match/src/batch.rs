//! Batch matching with per-name search grouping.
//!
//! Records sharing a normalized name need only one external search, so the
//! batch groups records by name, searches once per group, and matches every
//! record in the group against the same candidate set. Groups run with
//! bounded concurrency — each group is independent — and every search is
//! wrapped in a timeout so one hung call cannot stall the batch. A failed
//! or timed-out search degrades to a null match for that group's records;
//! the rest of the batch continues.

use std::future::Future;

use futures::stream::{self, StreamExt};
use tokio::time::Duration;

use card_ledger_catalog::CatalogCard;
use card_ledger_core::CardRecord;

use crate::engine::{MatchConfig, find_best_match};
use crate::normalize::normalize_name;
use crate::score::ScoreBreakdown;

/// Batch-level knobs on top of the per-pair [`MatchConfig`].
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub match_config: MatchConfig,
    /// How many name-group searches may be in flight at once.
    pub concurrency: usize,
    /// Hard ceiling per external search, covering transport retries the
    /// search function may do internally.
    pub search_timeout: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            concurrency: 4,
            search_timeout: Duration::from_secs(30),
        }
    }
}

/// An owned best-match for one record, detached from the candidate slice.
#[derive(Debug, Clone)]
pub struct BatchMatch {
    pub candidate: CatalogCard,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Statistics from one batch-match run.
#[derive(Debug, Default, Clone)]
pub struct BatchStats {
    /// Unique name groups searched.
    pub groups_searched: usize,
    /// Groups whose search failed or timed out.
    pub search_failures: usize,
    /// Records that ended up with a match.
    pub records_matched: usize,
}

/// The outcome of a batch match, index-aligned with the input records.
#[derive(Debug)]
pub struct BatchOutcome {
    /// `matches[i]` is the best match for `records[i]`, or `None` when no
    /// candidate cleared the bar or the group's search failed.
    pub matches: Vec<Option<BatchMatch>>,
    pub stats: BatchStats,
}

/// Match a whole batch of records using a caller-supplied search function.
///
/// `search` receives the normalized name of each unique group and returns
/// that group's candidate list. Records with an empty name are skipped
/// (null match) without a search.
pub async fn batch_match<F, Fut, E>(
    records: &[CardRecord],
    search: F,
    config: &BatchConfig,
) -> BatchOutcome
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<CatalogCard>, E>>,
    E: std::fmt::Display,
{
    let groups = group_by_name(records);
    let mut stats = BatchStats {
        groups_searched: groups.len(),
        ..Default::default()
    };
    let mut matches: Vec<Option<BatchMatch>> = vec![None; records.len()];

    let searched: Vec<(String, Vec<usize>, Option<Vec<CatalogCard>>)> =
        stream::iter(groups)
            .map(|(name, indices)| {
                // Call the search function eagerly so the future owns it;
                // the timeout wraps the whole lookup.
                let lookup = search(name.clone());
                let timeout = config.search_timeout;
                async move {
                    let outcome = match tokio::time::timeout(timeout, lookup).await {
                        Ok(Ok(candidates)) => Some(candidates),
                        Ok(Err(err)) => {
                            log::warn!("search for \"{name}\" failed: {err}");
                            None
                        }
                        Err(_) => {
                            log::warn!(
                                "search for \"{name}\" timed out after {}s",
                                timeout.as_secs()
                            );
                            None
                        }
                    };
                    (name, indices, outcome)
                }
            })
            .buffer_unordered(config.concurrency.max(1))
            .collect()
            .await;

    for (name, indices, outcome) in searched {
        let Some(candidates) = outcome else {
            // Null matches for the whole group; the batch continues
            stats.search_failures += 1;
            continue;
        };
        log::debug!(
            "\"{name}\": {} candidates for {} records",
            candidates.len(),
            indices.len()
        );
        for index in indices {
            if let Some(result) = find_best_match(&records[index], &candidates, &config.match_config)
            {
                matches[index] = Some(BatchMatch {
                    candidate: result.candidate.clone(),
                    score: result.score,
                    breakdown: result.breakdown,
                });
                stats.records_matched += 1;
            }
        }
    }

    log::info!(
        "batch match: {}/{} records matched across {} searches ({} failed)",
        stats.records_matched,
        records.len(),
        stats.groups_searched,
        stats.search_failures,
    );

    BatchOutcome { matches, stats }
}

/// Group record indices by normalized name, preserving discovery order.
/// Records with empty names are left out (they get a null match).
fn group_by_name(records: &[CardRecord]) -> Vec<(String, Vec<usize>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: std::collections::HashMap<String, Vec<usize>> =
        std::collections::HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let name = normalize_name(&record.name);
        if name.is_empty() {
            continue;
        }
        match groups.get_mut(&name) {
            Some(indices) => indices.push(index),
            None => {
                order.push(name.clone());
                groups.insert(name, vec![index]);
            }
        }
    }

    order
        .into_iter()
        .map(|name| {
            let indices = groups.remove(&name).unwrap_or_default();
            (name, indices)
        })
        .collect()
}
