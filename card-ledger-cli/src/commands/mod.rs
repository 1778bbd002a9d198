//! CLI command implementations.

pub(crate) mod analyze;
pub(crate) mod import;
pub(crate) mod match_cmd;

use card_ledger_import::{Severity, ValidationWarning};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Print one validation warning with severity coloring.
pub(crate) fn print_warning(warning: &ValidationWarning) {
    let severity = warning.severity.to_string();
    let label = match warning.severity {
        Severity::Error => format!("{}", severity.if_supports_color(Stdout, |t| t.red())),
        Severity::Warning => format!("{}", severity.if_supports_color(Stdout, |t| t.yellow())),
        Severity::Info => format!("{}", severity.if_supports_color(Stdout, |t| t.dimmed())),
    };
    println!("  [{label}] row {}: {}", warning.row, warning.message);
}

/// Truncate a string for table display.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
