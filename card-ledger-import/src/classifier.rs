//! Column-semantics classification.
//!
//! Given a raw table with arbitrary vendor headers, decides what each column
//! *means* without any user-supplied mapping. Classification runs through
//! ordered tiers per header — exact dictionary, price-prefix, fuzzy keyword,
//! then data-driven inference over sampled values — and a left-to-right
//! conflict-resolution pass guarantees that no two columns claim the same
//! semantic type.

use std::collections::HashMap;

use card_ledger_core::{
    ColumnMapping, ColumnType, DetectionMethod, is_condition_value, is_grading_value,
    is_letter_prefixed_number, is_rarity_value,
};

use crate::delimiter::Delimiter;
use crate::format::identify_format;
use crate::headers::{KEYWORD_LISTS, exact_header_type, prefix_header_type};
use crate::table::RawTable;

/// Maximum sampled values per column for data-driven inference.
const MAX_DATA_SAMPLES: usize = 20;

/// Fraction of sampled values that must agree on one value shape.
const DATA_MATCH_RATIO: f64 = 0.7;

/// Confidence assigned by the data-driven tier.
const DATA_CONFIDENCE: f64 = 0.7;

/// Confidence assigned by the price-prefix tier.
const PREFIX_CONFIDENCE: f64 = 0.95;

/// The classifier's output: one mapping per input column plus diagnostics.
///
/// Derived, read-only. The row normalizer consumes `columns`; everything
/// else is for the caller's reporting.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub columns: Vec<ColumnMapping>,
    /// Human-readable source-format label, diagnostic only.
    pub detected_format: String,
    pub warnings: Vec<String>,
    pub delimiter: Delimiter,
}

impl AnalysisResult {
    /// The column claiming a given semantic type, if any.
    ///
    /// At most one column can hold a non-`Unknown` type, so this lookup is
    /// unambiguous.
    pub fn mapping_for(&self, column_type: ColumnType) -> Option<&ColumnMapping> {
        self.columns
            .iter()
            .find(|m| m.column_type == column_type)
    }

    /// Whether a card-name column was detected. Without one the import
    /// cannot proceed; callers decide whether to reject.
    pub fn has_name_column(&self) -> bool {
        self.mapping_for(ColumnType::Name).is_some()
    }
}

/// Classify every column of a raw table.
pub fn analyze(table: &RawTable) -> AnalysisResult {
    let mut warnings = Vec::new();
    let mut columns: Vec<ColumnMapping> = Vec::with_capacity(table.headers.len());
    // type → index into `columns` of the current claim holder
    let mut claims: HashMap<ColumnType, usize> = HashMap::new();

    for (index, header) in table.headers.iter().enumerate() {
        let samples = table.column_samples(index, MAX_DATA_SAMPLES);
        let mut mapping = classify_column(header, index, &samples);

        if mapping.column_type != ColumnType::Unknown {
            resolve_claim(&mut mapping, &mut columns, &mut claims, &mut warnings);
        }

        columns.push(mapping);
    }

    if !claims.contains_key(&ColumnType::Name) {
        log::warn!("no card-name column detected among {} headers", table.headers.len());
        warnings.push(
            "No card-name column detected; rows cannot be imported without a name".to_string(),
        );
    }

    AnalysisResult {
        detected_format: identify_format(&table.headers),
        columns,
        warnings,
        delimiter: table.delimiter,
    }
}

/// Apply the one-claim-per-type invariant for a freshly classified column.
///
/// Types are claimed left to right. A later column may steal an earlier
/// claim only with strictly greater confidence, demoting the earlier column
/// and recording a warning; otherwise the later column is demoted. Either
/// way the outcome is deterministic for a fixed column order.
fn resolve_claim(
    mapping: &mut ColumnMapping,
    columns: &mut [ColumnMapping],
    claims: &mut HashMap<ColumnType, usize>,
    warnings: &mut Vec<String>,
) {
    let column_type = mapping.column_type;
    match claims.get(&column_type) {
        Some(&holder) => {
            if mapping.confidence > columns[holder].confidence {
                warnings.push(format!(
                    "Columns \"{}\" and \"{}\" both look like {}; using \"{}\"",
                    columns[holder].header,
                    mapping.header,
                    column_type,
                    mapping.header,
                ));
                columns[holder].demote();
                claims.insert(column_type, mapping.index);
            } else {
                log::debug!(
                    "column \"{}\" lost the {} claim to \"{}\"",
                    mapping.header,
                    column_type,
                    columns[holder].header,
                );
                mapping.demote();
            }
        }
        None => {
            claims.insert(column_type, mapping.index);
        }
    }
}

/// Run the classification tiers for one column. First match wins.
fn classify_column(header: &str, index: usize, samples: &[&str]) -> ColumnMapping {
    // Tier 1: exact dictionary hit
    if let Some(column_type) = exact_header_type(header) {
        return ColumnMapping {
            header: header.to_string(),
            index,
            column_type,
            confidence: 1.0,
            method: DetectionMethod::Exact,
        };
    }

    // Tier 2: price label with a variable suffix
    if let Some(column_type) = prefix_header_type(header) {
        return ColumnMapping {
            header: header.to_string(),
            index,
            column_type,
            confidence: PREFIX_CONFIDENCE,
            method: DetectionMethod::Pattern,
        };
    }

    // Tier 3: fuzzy keyword match over header tokens
    if let Some((column_type, confidence)) = fuzzy_header_type(header) {
        return ColumnMapping {
            header: header.to_string(),
            index,
            column_type,
            confidence,
            method: DetectionMethod::Pattern,
        };
    }

    // Tier 4: infer from what the column actually contains
    if let Some(column_type) = infer_from_samples(samples) {
        return ColumnMapping {
            header: header.to_string(),
            index,
            column_type,
            confidence: DATA_CONFIDENCE,
            method: DetectionMethod::Data,
        };
    }

    ColumnMapping::unknown(header, index)
}

/// Fuzzy keyword tier: a type qualifies when at least half the header's
/// tokens hit its keyword list; confidence is the type's base scaled by the
/// matched fraction. The best-scoring type wins, earlier list entries
/// winning exact ties.
fn fuzzy_header_type(header: &str) -> Option<(ColumnType, f64)> {
    let tokens = tokenize_header(header);
    if tokens.is_empty() {
        return None;
    }

    let mut best: Option<(ColumnType, f64)> = None;
    for &(column_type, base, keywords) in KEYWORD_LISTS {
        let matched = tokens
            .iter()
            .filter(|token| keywords.iter().any(|kw| token_matches(token, kw)))
            .count();
        if matched == 0 || matched * 2 < tokens.len() {
            continue;
        }
        let confidence = base * matched as f64 / tokens.len() as f64;
        if best.is_none_or(|(_, c)| confidence > c) {
            best = Some((column_type, confidence));
        }
    }
    best
}

/// Split a header into lowercase tokens on whitespace, underscore, hyphen,
/// and slash.
fn tokenize_header(header: &str) -> Vec<String> {
    header
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-' || c == '/')
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// A token hits a keyword on equality, or on containment for keywords long
/// enough not to fire spuriously ("num" inside "number", but never "no"
/// inside "notes").
fn token_matches(token: &str, keyword: &str) -> bool {
    token == keyword || (keyword.len() >= 3 && token.contains(keyword))
}

/// Data-driven tier: test sampled values against value-shape predicates.
///
/// Predicates run in a fixed order from most to least distinctive shape, so
/// the outcome is deterministic. A type is inferred when at least 70% of the
/// samples match its predicate.
fn infer_from_samples(samples: &[&str]) -> Option<ColumnType> {
    if samples.is_empty() {
        return None;
    }

    const PREDICATES: &[(ColumnType, fn(&str) -> bool)] = &[
        (ColumnType::CardNumber, looks_like_card_number),
        (ColumnType::Quantity, looks_like_quantity),
        (ColumnType::MarketPrice, looks_like_price),
        (ColumnType::Condition, is_condition_value),
        (ColumnType::GradingCompany, is_grading_value),
        (ColumnType::Rarity, is_rarity_value),
        (ColumnType::ImageUrl, looks_like_url),
    ];

    let total = samples.len() as f64;
    for &(column_type, predicate) in PREDICATES {
        let matched = samples.iter().filter(|v| predicate(v)).count() as f64;
        if matched / total >= DATA_MATCH_RATIO {
            return Some(column_type);
        }
    }
    None
}

// ── Value-shape predicates ──────────────────────────────────────────────────

/// Card-number shapes: `146/132`, `#146`, `SV049`, `SWSH001/SWSH250`.
///
/// Plain integers are deliberately excluded — they are indistinguishable
/// from quantities and prices by shape alone.
fn looks_like_card_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.len() > 20 {
        return false;
    }

    if let Some(rest) = trimmed.strip_prefix('#') {
        return !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit());
    }

    if let Some((left, right)) = trimmed.split_once('/') {
        return is_number_segment(left) && is_number_segment(right);
    }

    is_letter_prefixed_number(trimmed)
}

/// `146` or `SV049`: digits, optionally with a short leading letter run.
fn is_number_segment(segment: &str) -> bool {
    !segment.is_empty()
        && (segment.chars().all(|c| c.is_ascii_digit()) || is_letter_prefixed_number(segment))
}

/// Price-like: an amount with a currency marker or a decimal separator.
///
/// Bare integers are excluded for the same reason as in card numbers.
fn looks_like_price(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    let has_currency = trimmed
        .chars()
        .any(|c| matches!(c, '$' | '€' | '£' | '¥'));
    let numeric: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if numeric.is_empty() || !numeric.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let has_decimal = numeric.contains('.') || numeric.contains(',');
    let only_amount = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '$' | '€' | '£' | '¥' | ' '));

    only_amount && (has_currency || has_decimal)
}

/// Small positive integer, the shape of an owned-copies count.
fn looks_like_quantity(value: &str) -> bool {
    matches!(value.trim().parse::<u32>(), Ok(n) if (1..=999).contains(&n))
}

fn looks_like_url(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> RawTable {
        RawTable::parse(text, Delimiter::Comma).unwrap()
    }

    #[test]
    fn exact_headers_classify_with_full_confidence() {
        let result = analyze(&table("Name,Set,Rarity\nCharizard,Base Set,Holo Rare\n"));
        let name = result.mapping_for(ColumnType::Name).unwrap();
        assert_eq!(name.confidence, 1.0);
        assert_eq!(name.method, DetectionMethod::Exact);
        assert!(result.mapping_for(ColumnType::Rarity).is_some());
    }

    #[test]
    fn price_prefix_with_date_suffix_classifies() {
        let result = analyze(&table(
            "Name,TCG Market Price (as of 3/1/24)\nCharizard,412.50\n",
        ));
        let price = result.mapping_for(ColumnType::MarketPrice).unwrap();
        assert_eq!(price.method, DetectionMethod::Pattern);
        assert!((price.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_tier_catches_unlisted_spellings() {
        // "Product Name" has no exact entry; both tokens hit Name keywords
        let result = analyze(&table("Product Name,Set\nCharizard,Base Set\n"));
        let name = result.mapping_for(ColumnType::Name).unwrap();
        assert_eq!(name.header, "Product Name");
        assert_eq!(name.method, DetectionMethod::Pattern);
        assert!(name.confidence < 1.0);
    }

    #[test]
    fn exact_beats_fuzzy_even_when_evaluated_second() {
        let result = analyze(&table(
            "Product Name,Name\nCharizard,Charizard\n",
        ));
        let name = result.mapping_for(ColumnType::Name).unwrap();
        assert_eq!(name.header, "Name");
        assert_eq!(name.method, DetectionMethod::Exact);
        // The fuzzy column was demoted, with a warning naming both headers
        assert_eq!(result.columns[0].column_type, ColumnType::Unknown);
        assert!(result.warnings.iter().any(|w| w.contains("Product Name")));
    }

    #[test]
    fn one_claim_per_type_invariant_holds() {
        let result = analyze(&table(
            "Name,Card Name,Price,Value,Set,Expansion\na,b,1.0,2.0,c,d\n",
        ));
        let mut seen = std::collections::HashSet::new();
        for mapping in &result.columns {
            if mapping.column_type != ColumnType::Unknown {
                assert!(
                    seen.insert(mapping.column_type),
                    "type {} claimed twice",
                    mapping.column_type
                );
            }
        }
    }

    #[test]
    fn data_tier_infers_card_numbers() {
        let result = analyze(&table(
            "Name,Mystery\nCharizard,4/102\nBlastoise,2/102\nVenusaur,15/102\n",
        ));
        let number = result.mapping_for(ColumnType::CardNumber).unwrap();
        assert_eq!(number.header, "Mystery");
        assert_eq!(number.method, DetectionMethod::Data);
        assert!((number.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn data_tier_respects_match_ratio() {
        // Only half the values look like card numbers — below the 70% bar
        let result = analyze(&table(
            "Name,Mystery\na,4/102\nb,hello\nc,2/102\nd,world\n",
        ));
        assert_eq!(result.columns[1].column_type, ColumnType::Unknown);
    }

    #[test]
    fn missing_name_column_is_a_terminal_warning() {
        let result = analyze(&table("Set,Quantity\nBase Set,2\n"));
        assert!(!result.has_name_column());
        assert!(result.warnings.iter().any(|w| w.contains("name")));
    }

    #[test]
    fn card_number_shapes() {
        assert!(looks_like_card_number("146/132"));
        assert!(looks_like_card_number("#146"));
        assert!(looks_like_card_number("SV049"));
        assert!(looks_like_card_number("SWSH001/SWSH250"));
        assert!(!looks_like_card_number("146"));
        assert!(!looks_like_card_number("Charizard"));
        assert!(!looks_like_card_number(""));
    }

    #[test]
    fn price_shapes() {
        assert!(looks_like_price("$412.50"));
        assert!(looks_like_price("1.234,56"));
        assert!(looks_like_price("12,50"));
        assert!(looks_like_price("€ 9,99"));
        assert!(!looks_like_price("12"));
        assert!(!looks_like_price("Near Mint"));
    }

    #[test]
    fn quantity_shapes() {
        assert!(looks_like_quantity("1"));
        assert!(looks_like_quantity("42"));
        assert!(!looks_like_quantity("0"));
        assert!(!looks_like_quantity("1000"));
        assert!(!looks_like_quantity("4/102"));
    }
}
