//! Shared data model for the card-ledger import and matching engines.
//!
//! This crate centralizes the types every other crate speaks: the semantic
//! column vocabulary, the canonical card record all imports normalize into,
//! and the condition/grading/rarity vocabularies shared by the column
//! classifier and the matching engine.

pub mod column;
pub mod number;
pub mod record;
pub mod vocab;

pub use column::{ColumnMapping, ColumnType, DetectionMethod};
pub use number::{is_letter_prefixed_number, normalize_card_number};
pub use record::{CardRecord, Category, GradingCompany};
pub use vocab::{is_condition_value, is_grading_value, is_rarity_value, rarity_group};
