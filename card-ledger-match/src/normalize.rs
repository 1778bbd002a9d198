//! Text normalization for name and set comparison.
//!
//! Vendor exports and the reference catalog rarely agree on punctuation,
//! casing, or how card-style suffixes are written ("Charizard-EX",
//! "Charizard ex", "Charizard V-MAX"). Everything is reduced to lowercase
//! space-separated tokens with suffix styles folded to one spelling before
//! any comparison happens.

/// Normalize a card name for comparison.
///
/// Lowercases, collapses every non-alphanumeric character to a space,
/// collapses runs of spaces, and folds multiword suffix styles ("v max",
/// "v star", "lv x") to their canonical single token.
pub fn normalize_name(name: &str) -> String {
    let tokens = base_tokens(name);
    fold_suffix_tokens(tokens).join(" ")
}

/// Normalize a set name for comparison. Same reduction as names, minus the
/// suffix folding (set names have no card-style suffixes).
pub fn normalize_set_name(name: &str) -> String {
    base_tokens(name).join(" ")
}

/// Lowercase alphanumeric tokens, split on everything else.
fn base_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fold adjacent token pairs that are split spellings of one suffix.
///
/// "v max" → "vmax", "v star" → "vstar", "lv x" → "lvx". Runs once over
/// the token list; suffixes never nest.
fn fold_suffix_tokens(tokens: Vec<String>) -> Vec<String> {
    const PAIRS: &[(&str, &str, &str)] = &[
        ("v", "max", "vmax"),
        ("v", "star", "vstar"),
        ("v", "union", "vunion"),
        ("lv", "x", "lvx"),
    ];

    let mut folded = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if i + 1 < tokens.len()
            && let Some(&(_, _, merged)) = PAIRS
                .iter()
                .find(|(a, b, _)| tokens[i] == *a && tokens[i + 1] == *b)
        {
            folded.push(merged.to_string());
            i += 2;
        } else {
            folded.push(tokens[i].clone());
            i += 1;
        }
    }
    folded
}

/// Levenshtein edit distance.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

/// Edit-distance similarity in `[0, 1]`; 1.0 means identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}

/// Whether every significant word (longer than two characters) of one
/// string appears in the other. Checked in both directions.
pub fn tokens_contained(a: &str, b: &str) -> bool {
    all_tokens_in(a, b) || all_tokens_in(b, a)
}

fn all_tokens_in(needle: &str, haystack: &str) -> bool {
    let haystack_tokens: Vec<&str> = haystack.split(' ').collect();
    let mut significant = needle.split(' ').filter(|t| t.len() > 2).peekable();
    if significant.peek().is_none() {
        return false;
    }
    significant.all(|t| haystack_tokens.contains(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_reduce_to_canonical_tokens() {
        assert_eq!(normalize_name("Charizard-EX"), "charizard ex");
        assert_eq!(normalize_name("Charizard ex"), "charizard ex");
        assert_eq!(normalize_name("Charizard V-MAX"), "charizard vmax");
        assert_eq!(normalize_name("Charizard VMAX"), "charizard vmax");
        assert_eq!(normalize_name("Charizard V STAR"), "charizard vstar");
        assert_eq!(normalize_name("  Mewtwo   LV.X "), "mewtwo lvx");
    }

    #[test]
    fn set_names_keep_their_tokens() {
        assert_eq!(normalize_set_name("Scarlet & Violet—151"), "scarlet violet 151");
        assert_eq!(normalize_set_name("Base Set"), "base set");
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("charizard", "charizard"), 0);
        assert_eq!(edit_distance("charizard", "charizrd"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn similarity_scales_with_length() {
        assert_eq!(similarity("charizard", "charizard"), 1.0);
        assert!(similarity("charizard", "charizrd") > 0.8);
        assert!(similarity("charizard", "mew") < 0.5);
    }

    #[test]
    fn token_containment_requires_significant_words() {
        assert!(tokens_contained("dark charizard", "charizard dark holo"));
        assert!(tokens_contained("charizard dark holo", "dark charizard"));
        assert!(!tokens_contained("dark charizard", "dark blastoise"));
        // Only insignificant tokens → no containment claim
        assert!(!tokens_contained("of", "of the"));
    }
}
