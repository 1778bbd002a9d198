//! Header dictionaries for the column classifier.
//!
//! Three lookup layers, in decreasing strength:
//! 1. [`exact_header_type`] — known header spellings across the vendor
//!    vocabularies we have seen in real exports (TCGplayer, Cardmarket,
//!    eBay, Dragon Shield, ManaBox, hand-rolled spreadsheets), including
//!    German and French locale spellings.
//! 2. [`prefix_header_type`] — price labels that carry a variable suffix,
//!    e.g. `TCG Market Price (as of 2024-03-01)`.
//! 3. [`KEYWORD_LISTS`] — per-type keyword lists for fuzzy token matching
//!    when no dictionary entry fits.

use card_ledger_core::ColumnType;

/// Exact dictionary lookup for a header, case-insensitive and trimmed.
///
/// Entries are grouped by semantic type; within a type the English
/// spellings come first, then German, then French.
pub fn exact_header_type(header: &str) -> Option<ColumnType> {
    let lower = header.trim().to_lowercase();
    let column_type = match lower.as_str() {
        // ── Card name ───────────────────────────────────────────────────
        "name" | "card name" | "cardname" | "card" | "item name" | "item"
        | "item title" | "title" | "card title" | "simple name"
        | "pokemon" | "pokémon" | "pokemon name" | "character"
        | "karte" | "kartenname" | "produktname" | "artikelname" | "artikel"
        | "nom" | "nom de la carte" | "carte" | "nom du produit" | "produit" => {
            ColumnType::Name
        }

        // ── Set name ────────────────────────────────────────────────────
        "set" | "set name" | "setname" | "expansion" | "expansion name" | "series"
        | "edition" | "collection" | "set/expansion" | "set code" | "setcode"
        | "folder name" | "binder name"
        | "erweiterung" | "serie" | "sammlung" | "zyklus"
        | "extension" | "série" | "édition" => {
            ColumnType::SetName
        }

        // ── Card number ─────────────────────────────────────────────────
        "number" | "card number" | "cardnumber" | "card #" | "card no" | "card no."
        | "no" | "no." | "#" | "num" | "card num" | "collector number" | "collector #"
        | "collector no" | "number in set"
        | "nummer" | "kartennummer" | "sammlernummer"
        | "numéro" | "numero" | "numéro de carte" | "numero de carte" => {
            ColumnType::CardNumber
        }

        // ── Quantity ────────────────────────────────────────────────────
        "quantity" | "qty" | "qty." | "count" | "amount" | "total quantity"
        | "add to quantity" | "quantity owned" | "qty owned" | "owned" | "copies"
        | "trade quantity"
        | "anzahl" | "menge" | "stückzahl" | "stueckzahl"
        | "quantité" | "quantite" | "nombre" | "nombre d'exemplaires" => {
            ColumnType::Quantity
        }

        // ── Purchase price ──────────────────────────────────────────────
        "purchase price" | "price paid" | "paid" | "cost" | "cost basis" | "my cost"
        | "buy price" | "bought for" | "price bought" | "acquisition cost"
        | "average cost paid" | "avg cost" | "avg. cost" | "total paid" | "paid price"
        | "kaufpreis" | "einkaufspreis" | "bezahlt" | "bezahlter preis"
        | "prix d'achat" | "prix achat" | "coût" | "cout" | "payé" | "paye" => {
            ColumnType::PurchasePrice
        }

        // ── Market price ────────────────────────────────────────────────
        "market price" | "market value" | "market" | "current value" | "current price"
        | "value" | "price" | "price each" | "estimated value" | "est. value"
        | "tcg market price" | "tcgplayer market price" | "tcg low price"
        | "low" | "mid" | "low price" | "mid price" | "trend price" | "trend"
        | "price trend" | "avg. price" | "average price"
        | "marktpreis" | "marktwert" | "aktueller wert" | "wert" | "preis"
        | "preistrend" | "durchschnittspreis"
        | "prix" | "prix du marché" | "prix du marche" | "valeur"
        | "valeur marchande" | "cote" | "tendance" | "prix moyen" => {
            ColumnType::MarketPrice
        }

        // ── Condition ───────────────────────────────────────────────────
        "condition" | "card condition" | "cond" | "cond." | "state"
        | "zustand" | "erhaltung"
        | "état" | "etat" | "condition de la carte" => ColumnType::Condition,

        // ── Grading company ─────────────────────────────────────────────
        "grading company" | "grading service" | "grader" | "graded by" | "grading"
        | "cert company" | "certification company" | "slab company"
        | "bewertungsfirma" | "bewertungsunternehmen"
        | "société de gradation" | "societe de gradation" | "service de gradation" => {
            ColumnType::GradingCompany
        }

        // ── Grade ───────────────────────────────────────────────────────
        "grade" | "card grade" | "grade value" | "numeric grade" | "grade number"
        | "bewertung" | "note" | "note de gradation" => ColumnType::Grade,

        // ── Rarity ──────────────────────────────────────────────────────
        "rarity" | "rarity type" | "card rarity"
        | "seltenheit" | "rareté" | "rarete" => ColumnType::Rarity,

        // ── Category ────────────────────────────────────────────────────
        "category" | "product type" | "item type" | "product line" | "product category"
        | "type" | "card type"
        | "kategorie" | "produktart" | "typ"
        | "catégorie" | "categorie" | "type de produit" => ColumnType::Category,

        // ── Language ────────────────────────────────────────────────────
        "language" | "lang" | "language code"
        | "sprache" | "langue" => ColumnType::Language,

        // ── Notes ───────────────────────────────────────────────────────
        "notes" | "comment" | "comments" | "remarks" | "memo" | "description"
        | "kommentar" | "kommentare" | "bemerkung" | "bemerkungen" | "beschreibung"
        | "remarque" | "remarques" | "commentaire" | "commentaires" => ColumnType::Notes,

        // ── Image URL ───────────────────────────────────────────────────
        "image" | "image url" | "imageurl" | "img" | "img url" | "image link"
        | "photo" | "photo url" | "picture" | "picture url" | "scan"
        | "bild" | "bildlink" | "bild url"
        | "lien image" | "url de l'image" => ColumnType::ImageUrl,

        // ── Certificate number ──────────────────────────────────────────
        "cert" | "cert number" | "cert #" | "cert no" | "cert no." | "cert id"
        | "certificate number" | "certification number" | "certification"
        | "psa cert" | "serial" | "serial number"
        | "zertifikat" | "zertifikatsnummer"
        | "certificat" | "numéro de certificat" | "numero de certificat" => {
            ColumnType::CertNumber
        }

        _ => return None,
    };
    Some(column_type)
}

/// Price-label prefixes with a variable trailing suffix.
///
/// TCGplayer exports stamp the snapshot date into the header itself
/// (`TCG Market Price (as of 3/1/24)`), so exact lookup never hits them.
pub const PRICE_PREFIXES: &[(&str, ColumnType)] = &[
    ("tcg market price", ColumnType::MarketPrice),
    ("tcgplayer market price", ColumnType::MarketPrice),
    ("market price", ColumnType::MarketPrice),
    ("market value", ColumnType::MarketPrice),
    ("trend price", ColumnType::MarketPrice),
    ("average cost", ColumnType::PurchasePrice),
    ("purchase price", ColumnType::PurchasePrice),
    ("price paid", ColumnType::PurchasePrice),
];

/// Match a header against the known price-label prefixes.
pub fn prefix_header_type(header: &str) -> Option<ColumnType> {
    let lower = header.trim().to_lowercase();
    PRICE_PREFIXES
        .iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map(|&(_, column_type)| column_type)
}

/// Per-type keyword lists for the fuzzy tier: `(type, base confidence,
/// keywords)`.
///
/// Base confidences reflect how unambiguous the keywords are: "qty" can
/// only mean a quantity (0.85), while "price" alone could be either price
/// column (0.75). The classifier scales the base by the fraction of header
/// tokens that matched.
pub const KEYWORD_LISTS: &[(ColumnType, f64, &[&str])] = &[
    (ColumnType::Quantity, 0.85, &["quantity", "qty", "count", "owned", "copies"]),
    (ColumnType::Condition, 0.85, &["condition", "cond", "zustand"]),
    (ColumnType::Rarity, 0.85, &["rarity", "rare", "seltenheit"]),
    (ColumnType::CertNumber, 0.85, &["cert", "certificate", "certification"]),
    (ColumnType::Language, 0.85, &["language", "lang", "sprache", "langue"]),
    (
        ColumnType::PurchasePrice,
        0.8,
        &["cost", "paid", "buy", "bought", "purchase", "acquisition"],
    ),
    (ColumnType::Name, 0.8, &["name", "card", "title", "product", "pokemon"]),
    (ColumnType::SetName, 0.8, &["set", "expansion", "series", "edition"]),
    (ColumnType::Grade, 0.8, &["grade"]),
    (
        ColumnType::GradingCompany,
        0.8,
        &["grading", "grader", "graded", "slab"],
    ),
    (ColumnType::Notes, 0.8, &["notes", "comment", "remark", "memo"]),
    (
        ColumnType::ImageUrl,
        0.8,
        &["image", "img", "photo", "picture", "scan"],
    ),
    (
        ColumnType::CardNumber,
        0.75,
        &["number", "num", "collector", "nummer", "numero"],
    ),
    (
        ColumnType::MarketPrice,
        0.75,
        &["market", "value", "price", "worth", "trend", "preis", "prix"],
    ),
    (ColumnType::Category, 0.75, &["category", "kind", "kategorie"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(exact_header_type("Card Name"), Some(ColumnType::Name));
        assert_eq!(exact_header_type("  QTY  "), Some(ColumnType::Quantity));
        assert_eq!(exact_header_type("SELTENHEIT"), Some(ColumnType::Rarity));
        // "Product Name" is deliberately left to the fuzzy tier
        assert_eq!(exact_header_type("Product Name"), None);
        assert_eq!(exact_header_type("mystery column"), None);
    }

    #[test]
    fn german_and_french_spellings_resolve() {
        assert_eq!(exact_header_type("Kartenname"), Some(ColumnType::Name));
        assert_eq!(exact_header_type("Erweiterung"), Some(ColumnType::SetName));
        assert_eq!(exact_header_type("Numéro de carte"), Some(ColumnType::CardNumber));
        assert_eq!(exact_header_type("Prix d'achat"), Some(ColumnType::PurchasePrice));
    }

    #[test]
    fn price_prefix_with_date_suffix() {
        assert_eq!(
            prefix_header_type("TCG Market Price (as of 3/1/24)"),
            Some(ColumnType::MarketPrice)
        );
        assert_eq!(
            prefix_header_type("Average Cost (per copy)"),
            Some(ColumnType::PurchasePrice)
        );
        assert_eq!(prefix_header_type("Shipping Cost"), None);
    }
}
