//! Row normalization: raw string cells → one canonical [`CardRecord`].
//!
//! The normalizer looks every semantic type up through its column mapping
//! and applies type-specific coercion. It never fails — unusable values
//! degrade to the field's default, and anything worth telling the caller
//! about becomes a validation warning.

use card_ledger_core::{
    CardRecord, Category, ColumnMapping, ColumnType, GradingCompany, normalize_card_number,
};

use crate::table::RawTable;
use crate::warning::{ValidationWarning, WarningKind};

/// Certificate numbers at or above this digit count upgrade a raw record's
/// grading company. Only one major grading service issues all-digit
/// certificates this long.
const CERT_DIGITS_FOR_UPGRADE: usize = 8;

/// Normalize one raw row into a canonical record.
///
/// Warnings raised during normalization (currently only the
/// defaulted-purchase-price info) are appended to `warnings`.
pub fn normalize_row(
    row_index: usize,
    table: &RawTable,
    columns: &[ColumnMapping],
    warnings: &mut Vec<ValidationWarning>,
) -> CardRecord {
    let mut record = CardRecord::empty(row_index);

    let mut explicit_category = None;
    let mut company_column = None;
    let mut grade_value = None;
    let mut purchase_present = false;

    for mapping in columns {
        let Some(value) = table
            .value(row_index, mapping.index)
            .map(str::trim)
            .filter(|v| !v.is_empty())
        else {
            continue;
        };

        match mapping.column_type {
            ColumnType::Name => record.name = value.to_string(),
            ColumnType::SetName => record.set_name = Some(value.to_string()),
            ColumnType::CardNumber => {
                record.card_number = Some(value.to_string());
                record.normalized_number = normalize_card_number(value);
            }
            ColumnType::Quantity => record.quantity = parse_quantity(value).unwrap_or(1),
            ColumnType::PurchasePrice => {
                record.purchase_price = parse_price(value);
                purchase_present = true;
            }
            ColumnType::MarketPrice => record.market_price = parse_price(value),
            ColumnType::Condition => record.condition = Some(value.to_string()),
            ColumnType::GradingCompany => {
                company_column = Some(GradingCompany::parse(value));
            }
            ColumnType::Grade => grade_value = Some(value.to_string()),
            ColumnType::Rarity => record.rarity = Some(value.to_string()),
            ColumnType::Category => explicit_category = Category::parse(value),
            ColumnType::Language => record.language = Some(value.to_string()),
            ColumnType::Notes => record.notes = Some(value.to_string()),
            ColumnType::ImageUrl => record.image_url = Some(value.to_string()),
            ColumnType::CertNumber => record.cert_number = Some(value.to_string()),
            ColumnType::Unknown => {}
        }
    }

    // A grade cell like "PSA 10" carries both the company and the numeric
    // grade; the extracted company overrides any grading-company column.
    let mut company = company_column.unwrap_or(GradingCompany::Raw);
    if let Some(raw_grade) = grade_value {
        match split_combined_grade(&raw_grade) {
            Some((extracted, numeric)) => {
                company = extracted;
                record.grade = Some(numeric);
            }
            None => record.grade = Some(raw_grade),
        }
    }

    // A long all-digit certificate on an otherwise-raw record implies the
    // one grading service that issues certs of that shape.
    if company.is_raw()
        && let Some(cert) = record.cert_number.as_deref()
        && is_long_digit_cert(cert)
    {
        company = GradingCompany::Psa;
    }
    record.grading_company = company;

    record.category = explicit_category.unwrap_or(if record.grading_company.is_raw() {
        Category::Raw
    } else {
        Category::Graded
    });

    if record.purchase_price.is_none() && !purchase_present {
        record.purchase_price = Some(0.0);
        warnings.push(ValidationWarning::info(
            WarningKind::DefaultedPurchasePrice,
            row_index,
            "No purchase price in export; defaulted to 0",
        ));
    }

    record
}

/// Normalize every row of a table.
pub fn normalize_table(
    table: &RawTable,
    columns: &[ColumnMapping],
    warnings: &mut Vec<ValidationWarning>,
) -> Vec<CardRecord> {
    (0..table.row_count())
        .map(|row| normalize_row(row, table, columns, warnings))
        .collect()
}

/// Parse a quantity cell. Thousands separators are stripped; anything
/// missing, non-positive, or unparsable yields `None` (callers default
/// to 1).
pub fn parse_quantity(value: &str) -> Option<u32> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();
    match cleaned.parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).ok(),
        _ => None,
    }
}

/// Parse a currency amount.
///
/// Strips currency symbols, letters, and whitespace, then disambiguates
/// `.` and `,` the way mixed-locale exports require: when both appear the
/// rightmost is the decimal separator; a lone comma is a decimal separator
/// only with at most two trailing digits. Unparsable or negative values
/// yield `None` — never zero.
pub fn parse_price(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) => {
            if dot > comma {
                cleaned.replace(',', "")
            } else {
                cleaned.replace('.', "").replace(',', ".")
            }
        }
        (None, Some(comma)) => {
            let fraction_digits = cleaned.len() - comma - 1;
            if cleaned.matches(',').count() == 1 && fraction_digits <= 2 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        _ => cleaned,
    };

    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Some(n),
        _ => None,
    }
}

/// Split a combined grade cell like `PSA 10` or `BGS 9.5` into the company
/// and the numeric grade. Returns `None` when the cell is just a grade.
fn split_combined_grade(value: &str) -> Option<(GradingCompany, String)> {
    let mut parts = value.split_whitespace();
    let company_token = parts.next()?;
    let grade_token = parts.next()?;

    let company = GradingCompany::parse(company_token);
    if matches!(company, GradingCompany::Raw | GradingCompany::Other(_)) {
        return None;
    }
    if grade_token.parse::<f64>().is_err() {
        return None;
    }
    Some((company, grade_token.to_string()))
}

/// PSA-shaped certificate: all digits, long enough not to be a grade.
fn is_long_digit_cert(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.len() >= CERT_DIGITS_FOR_UPGRADE && trimmed.chars().all(|c| c.is_ascii_digit())
}
