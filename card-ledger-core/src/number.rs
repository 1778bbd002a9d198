//! Card-number normalization shared by the importer and the matcher.
//!
//! Both sides must reduce numbers to the same canonical short form, or an
//! imported `4/102` would never line up with a catalog `4`.

/// Derive the canonical short form of a card number.
///
/// `146/132` keeps the numerator, `SV001/SV198` keeps the upper-cased first
/// segment, a leading `#` is stripped, `sv146` upper-cases, and a plain
/// integer passes through unchanged. Empty, `"0"`, and all-zero decimal
/// strings are the "no number" sentinels several vendors export.
pub fn normalize_card_number(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains('0') && trimmed.chars().all(|c| c == '0' || c == '.') {
        return None;
    }

    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let first = match stripped.split_once('/') {
        Some((numerator, _)) => numerator.trim(),
        None => stripped,
    };
    if first.is_empty() {
        return None;
    }

    if is_letter_prefixed_number(first) {
        Some(first.to_uppercase())
    } else {
        Some(first.to_string())
    }
}

/// A short alphabetic prefix followed by digits only (`SV049`, `swsh284`).
pub fn is_letter_prefixed_number(value: &str) -> bool {
    let letters = value.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if letters == 0 || letters > 5 || letters == value.len() {
        return false;
    }
    value.chars().skip(letters).all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_short_forms() {
        assert_eq!(normalize_card_number("146/132").as_deref(), Some("146"));
        assert_eq!(normalize_card_number("#146").as_deref(), Some("146"));
        assert_eq!(normalize_card_number("SV146").as_deref(), Some("SV146"));
        assert_eq!(normalize_card_number("sv049").as_deref(), Some("SV049"));
        assert_eq!(
            normalize_card_number("SWSH001/SWSH250").as_deref(),
            Some("SWSH001")
        );
        assert_eq!(normalize_card_number("146").as_deref(), Some("146"));
    }

    #[test]
    fn no_number_sentinels() {
        assert_eq!(normalize_card_number(""), None);
        assert_eq!(normalize_card_number("0"), None);
        assert_eq!(normalize_card_number("000"), None);
        assert_eq!(normalize_card_number("0.0000"), None);
    }

    #[test]
    fn letter_prefix_shape() {
        assert!(is_letter_prefixed_number("SV049"));
        assert!(is_letter_prefixed_number("swsh284"));
        assert!(!is_letter_prefixed_number("146"));
        assert!(!is_letter_prefixed_number("PROMO"));
        assert!(!is_letter_prefixed_number("TOOLONG123"));
    }
}
