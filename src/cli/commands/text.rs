//! Offline text commands: classification and formatting.

use crate::chat::{classify, format_message, score};
use crate::cli::error::CliResult;
use crate::cli::utils::format_scores;
use colored::*;
use std::io::Write;

/// Print the topic a query is routed to and the non-zero scores behind it.
pub fn classify_query<W: Write>(query: &str, json: bool, out: &mut W) -> CliResult<()> {
    let label = classify(query);
    let scores = score(query);

    if json {
        let value = serde_json::json!({
            "label": label,
            "scores": scores,
        });
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    writeln!(out, "{} {}", "Topic:".bold(), label.as_str().green())?;
    if label.is_general() {
        writeln!(out, "{}", "no topic keywords matched".dimmed())?;
    }
    for line in format_scores(&scores) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Format text into chat markup. A single trailing newline, as left by
/// piping a file, is dropped first.
pub fn format_text<W: Write>(input: &str, out: &mut W) -> CliResult<()> {
    let input = input
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(input);
    writeln!(out, "{}", format_message(input))?;
    Ok(())
}
