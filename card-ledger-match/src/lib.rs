//! Record matching engine.
//!
//! Given a canonical imported record and reference-catalog candidates,
//! scores each candidate on name/set/number/rarity similarity plus
//! combination bonuses and returns the best match(es). The batch layer
//! groups records by name to minimize external searches, with bounded
//! concurrency and per-group failure isolation.

pub mod batch;
pub mod engine;
pub mod normalize;
pub mod score;

pub use batch::{BatchConfig, BatchMatch, BatchOutcome, BatchStats, batch_match};
pub use engine::{MatchConfig, MatchResult, find_all_matches, find_best_match};
pub use normalize::{normalize_name, normalize_set_name};
pub use score::{ScoreBreakdown, score_candidate};
