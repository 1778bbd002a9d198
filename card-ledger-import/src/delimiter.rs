//! Field-delimiter detection for raw tabular text.
//!
//! Exports in the wild use commas, semicolons (common in European locales
//! where the comma is the decimal separator), tabs, and pipes. Detection
//! samples the first few lines and scores each candidate by how consistently
//! it splits them. There is no error path — detection always returns a
//! usable delimiter, defaulting to comma.

/// A field separator candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

/// Candidates in scoring order. Comma first so it wins all ties.
const CANDIDATES: &[Delimiter] = &[
    Delimiter::Comma,
    Delimiter::Semicolon,
    Delimiter::Tab,
    Delimiter::Pipe,
];

/// Lines sampled from the top of the input.
const SAMPLE_LINES: usize = 5;

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Tab => '\t',
            Self::Pipe => '|',
        }
    }

    /// Byte form for the `csv` reader configuration.
    pub fn as_byte(&self) -> u8 {
        self.as_char() as u8
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Tab => "tab",
            Self::Pipe => "pipe",
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the field separator used by raw tabular text.
///
/// Samples up to the first five non-blank lines. Each candidate is counted
/// per line, ignoring occurrences inside quoted spans. A candidate whose
/// per-line counts are mutually consistent (spread of at most one) scores
/// `first_line_count * nonzero_line_count`; inconsistent candidates fall
/// back to a weak `nonzero_line_count * 0.5`. The highest score wins; ties
/// and an all-zero result both default to comma.
pub fn detect_delimiter(text: &str) -> Delimiter {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return Delimiter::Comma;
    }

    let mut best = Delimiter::Comma;
    let mut best_score = 0.0f64;

    for &candidate in CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_unquoted(line, candidate.as_char()))
            .collect();

        let first = counts[0];
        let nonzero = counts.iter().filter(|&&c| c > 0).count();
        if nonzero == 0 {
            continue;
        }

        let min = *counts.iter().min().unwrap_or(&0);
        let max = *counts.iter().max().unwrap_or(&0);
        let consistent = first > 0 && max - min <= 1;

        let score = if consistent {
            (first * nonzero) as f64
        } else {
            nonzero as f64 * 0.5
        };

        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

/// Count occurrences of `delimiter` in a line, skipping quoted spans.
///
/// A simple quote-toggle scan, not a full CSV grammar — good enough to keep
/// `"Charizard, holo"` from inflating the comma count.
fn count_unquoted(line: &str, delimiter: char) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
