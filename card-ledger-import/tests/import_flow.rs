use std::collections::HashSet;

use card_ledger_core::{Category, ColumnType, GradingCompany};
use card_ledger_import::{
    ImportError, Severity, WarningKind, import_text, valid_records,
};

#[test]
fn tcgplayer_style_export_imports_cleanly() {
    let text = "\
Quantity,Product Line,Product Name,Set Name,Number,Rarity,Condition,TCG Market Price (as of 3/1/24)
1,Pokemon,Charizard,Base Set,4/102,Holo Rare,Near Mint,412.50
2,Pokemon,Blastoise,Base Set,2/102,Holo Rare,Lightly Played,180.00
";
    let outcome = import_text(text, None).unwrap();

    assert_eq!(outcome.analysis.detected_format, "TCGplayer Collection");
    assert_eq!(outcome.records.len(), 2);

    let charizard = &outcome.records[0];
    assert_eq!(charizard.name, "Charizard");
    assert_eq!(charizard.set_name.as_deref(), Some("Base Set"));
    assert_eq!(charizard.normalized_number.as_deref(), Some("4"));
    assert_eq!(charizard.market_price, Some(412.5));
    assert_eq!(charizard.quantity, 1);
    assert_eq!(charizard.grading_company, GradingCompany::Raw);
    assert_eq!(charizard.category, Category::Raw);

    assert_eq!(outcome.records[1].quantity, 2);
}

#[test]
fn german_semicolon_export_imports() {
    let text = "\
Kartenname;Erweiterung;Anzahl;Preis;Zustand
Glurak;Basis Set;1;412,50;Near Mint
Turtok;Basis Set;2;99,95;NM
";
    let outcome = import_text(text, None).unwrap();

    assert_eq!(outcome.analysis.detected_format, "Cardmarket Artikel (DE)");
    assert_eq!(outcome.analysis.delimiter.name(), "semicolon");
    assert_eq!(outcome.records[0].name, "Glurak");
    assert_eq!(outcome.records[0].market_price, Some(412.5));
    assert_eq!(outcome.records[1].market_price, Some(99.95));
}

#[test]
fn graded_cards_resolve_company_grade_and_category() {
    let text = "\
Name,Grade,Cert Number
Charizard,PSA 10,82345678
Pikachu,,91234567
Mewtwo,BGS 9.5,
";
    let outcome = import_text(text, None).unwrap();

    let charizard = &outcome.records[0];
    assert_eq!(charizard.grading_company, GradingCompany::Psa);
    assert_eq!(charizard.grade.as_deref(), Some("10"));
    assert_eq!(charizard.category, Category::Graded);

    // No grade, but a PSA-shaped cert upgrades the raw record
    let pikachu = &outcome.records[1];
    assert_eq!(pikachu.grading_company, GradingCompany::Psa);
    assert_eq!(pikachu.category, Category::Graded);

    let mewtwo = &outcome.records[2];
    assert_eq!(mewtwo.grading_company, GradingCompany::Bgs);
    assert_eq!(mewtwo.grade.as_deref(), Some("9.5"));
}

#[test]
fn rows_without_names_are_excluded_not_fatal() {
    let text = "\
Name,Set,Market Price
Charizard,Base Set,412.50
,Base Set,9.99
Blastoise,Base Set,180.00
";
    let outcome = import_text(text, None).unwrap();
    assert_eq!(outcome.records.len(), 3);

    let valid = valid_records(&outcome.records, &outcome.warnings);
    assert_eq!(valid.len(), 2);
    assert!(outcome
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::MissingName && w.severity == Severity::Error && w.row == 1));
}

#[test]
fn existing_inventory_duplicates_are_flagged() {
    let first = import_text("Name,Set,Number\nCharizard,Base Set,4/102\n", None).unwrap();
    let existing: HashSet<String> = first
        .records
        .iter()
        .map(|r| r.identity_key())
        .collect();

    let second = import_text(
        "Name,Set,Number\nCharizard,Base Set,4/102\nMew,Promo,8\n",
        Some(&existing),
    )
    .unwrap();

    let dup: Vec<_> = second
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::DuplicateOfExisting)
        .collect();
    assert_eq!(dup.len(), 1);
    assert_eq!(dup[0].row, 0);
}

#[test]
fn no_name_column_is_a_structural_failure() {
    let err = import_text("Set,Market Price\nBase Set,412.50\n", None).unwrap_err();
    assert!(matches!(err, ImportError::NoNameColumn(_)));
}

#[test]
fn empty_input_is_a_structural_failure() {
    assert!(matches!(
        import_text("", None),
        Err(ImportError::EmptyInput)
    ));
}

#[test]
fn no_two_columns_share_a_detected_type() {
    let text = "\
Name,Card Name,Set,Expansion,Price,Market Value,Qty,Count
Charizard,Charizard,Base Set,Base Set,412.50,412.50,1,1
";
    let outcome = import_text(text, None).unwrap();

    let mut seen = HashSet::new();
    for mapping in &outcome.analysis.columns {
        if mapping.column_type != ColumnType::Unknown {
            assert!(seen.insert(mapping.column_type));
        }
    }
}
