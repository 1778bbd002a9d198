//! Entry point for `card-ledger analyze`.

use std::path::PathBuf;

use card_ledger_core::ColumnType;
use card_ledger_import::{RawTable, analyze, detect_delimiter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::truncate_str;
use crate::error::CliError;

/// Classify the columns of an export and report the mapping without
/// importing anything.
pub(crate) fn run_analyze(file: PathBuf) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&file)?;
    let delimiter = detect_delimiter(&text);
    let table = RawTable::parse(&text, delimiter)?;
    let analysis = analyze(&table);

    println!("File:      {}", file.display());
    println!("Delimiter: {}", analysis.delimiter);
    println!("Format:    {}", analysis.detected_format);
    println!("Rows:      {}", table.row_count());
    println!();
    println!("{:<4} {:<28} {:<18} {:>6}  {}", "#", "header", "type", "conf", "method");

    for mapping in &analysis.columns {
        let header = truncate_str(&mapping.header, 28);
        let type_name = mapping.column_type.to_string();
        let confidence = format!("{:.2}", mapping.confidence);
        let line = format!(
            "{:<4} {:<28} {:<18} {:>6}  {}",
            mapping.index, header, type_name, confidence, mapping.method
        );
        if mapping.column_type == ColumnType::Unknown {
            println!("{}", line.if_supports_color(Stdout, |t| t.dimmed()));
        } else if mapping.confidence >= 0.95 {
            println!("{}", line.if_supports_color(Stdout, |t| t.green()));
        } else {
            println!("{}", line.if_supports_color(Stdout, |t| t.yellow()));
        }
    }

    if !analysis.warnings.is_empty() {
        println!();
        for warning in &analysis.warnings {
            println!(
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                warning
            );
        }
    }

    Ok(())
}
