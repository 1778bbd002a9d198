//! Source-format identification.
//!
//! Scores the header set against known vendor signatures so reports can say
//! "this looks like a TCGplayer export". Purely informative — nothing in the
//! pipeline branches on the detected format, and a wrong guess never blocks
//! ingestion.

/// Label reported when no vendor signature qualifies.
pub const GENERIC_FORMAT: &str = "Generic CSV";

/// A named header-set fingerprint for one vendor's export format.
struct FormatSignature {
    name: &'static str,
    /// Every required header must be present for the signature to qualify.
    required: &'static [&'static str],
    /// Optional headers only add score.
    optional: &'static [&'static str],
}

/// Known export fingerprints, based on the column sets the vendors actually
/// ship. Order only breaks exact score ties (first wins).
const SIGNATURES: &[FormatSignature] = &[
    FormatSignature {
        name: "TCGplayer Collection",
        required: &["product name", "product line"],
        optional: &[
            "title",
            "number",
            "rarity",
            "condition",
            "tcg market price",
            "total quantity",
            "add to quantity",
            "photo url",
        ],
    },
    FormatSignature {
        name: "Cardmarket Articles",
        required: &["name", "expansion"],
        optional: &["language", "price", "count", "condition", "comments"],
    },
    FormatSignature {
        name: "Cardmarket Artikel (DE)",
        required: &["kartenname", "erweiterung"],
        optional: &["sprache", "zustand", "anzahl", "preis", "kommentar"],
    },
    FormatSignature {
        name: "Dragon Shield Card Manager",
        required: &["card name", "set name"],
        optional: &[
            "folder name",
            "quantity",
            "card number",
            "condition",
            "printing",
            "language",
            "price bought",
            "date bought",
        ],
    },
    FormatSignature {
        name: "ManaBox Export",
        required: &["name", "set code"],
        optional: &[
            "set name",
            "collector number",
            "foil",
            "rarity",
            "quantity",
            "condition",
            "language",
            "purchase price",
        ],
    },
    FormatSignature {
        name: "eBay Seller Report",
        required: &["title", "sold for"],
        optional: &["custom label", "quantity", "item number"],
    },
];

/// Report a human-readable label for the source format of a header set.
pub fn identify_format(headers: &[String]) -> String {
    let lower: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    let mut best: Option<(&str, u32)> = None;
    for signature in SIGNATURES {
        if !signature.required.iter().all(|req| header_present(&lower, req)) {
            continue;
        }
        let optional_hits = signature
            .optional
            .iter()
            .filter(|opt| header_present(&lower, opt))
            .count() as u32;
        let score = 10 * signature.required.len() as u32 + 3 * optional_hits;
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((signature.name, score));
        }
    }

    match best {
        Some((name, _)) => name.to_string(),
        None => GENERIC_FORMAT.to_string(),
    }
}

/// Names of every known format signature, for diagnostics.
pub fn known_formats() -> Vec<&'static str> {
    SIGNATURES.iter().map(|s| s.name).collect()
}

/// Prefix-tolerant presence check, so `TCG Market Price (as of 3/1/24)`
/// satisfies the `tcg market price` entry.
fn header_present(headers_lower: &[String], entry: &str) -> bool {
    headers_lower.iter().any(|h| h.starts_with(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identifies_tcgplayer_export() {
        let h = headers(&[
            "Quantity",
            "Product Line",
            "Product Name",
            "Title",
            "Number",
            "Rarity",
            "Condition",
            "TCG Market Price (as of 3/1/24)",
        ]);
        assert_eq!(identify_format(&h), "TCGplayer Collection");
    }

    #[test]
    fn identifies_cardmarket_german_export() {
        let h = headers(&["Kartenname", "Erweiterung", "Sprache", "Zustand", "Preis"]);
        assert_eq!(identify_format(&h), "Cardmarket Artikel (DE)");
    }

    #[test]
    fn missing_required_header_disqualifies() {
        // "Product Line" missing → TCGplayer ineligible, nothing else fits
        let h = headers(&["Product Name", "Number", "Rarity"]);
        assert_eq!(identify_format(&h), GENERIC_FORMAT);
    }

    #[test]
    fn best_scoring_signature_wins() {
        // Qualifies as both Cardmarket Articles and (via prefix) nothing
        // else; optionals decide the score
        let h = headers(&["Name", "Expansion", "Language", "Price", "Condition"]);
        assert_eq!(identify_format(&h), "Cardmarket Articles");
    }

    #[test]
    fn unknown_headers_fall_back() {
        let h = headers(&["alpha", "beta", "gamma"]);
        assert_eq!(identify_format(&h), GENERIC_FORMAT);
    }
}
