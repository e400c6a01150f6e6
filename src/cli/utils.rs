//! Shared utility functions for CLI commands

use crate::chat::formatter::UNORDERED_LIST_OPEN;
use crate::chat::TopicScore;
use colored::*;
use regex::Regex;
use std::sync::OnceLock;

/// Display a user-friendly error message with suggestions
pub fn display_error_with_suggestions<E: std::fmt::Display>(error: &E, context: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), context);
    eprintln!("   {}", error.to_string().red());

    let error_str = error.to_string().to_lowercase();
    if error_str.contains("institutional email") {
        eprintln!("{}", "💡 Suggestions:".blue());
        eprintln!("   • Admin accounts need an address containing .edu, .ac., university, college or institute");
    } else if error_str.contains("specialization") {
        eprintln!("{}", "💡 Suggestions:".blue());
        eprintln!("   • Pass --specialization at least once, e.g. --specialization \"Career Counseling\"");
    } else if error_str.contains("permission denied") {
        eprintln!("{}", "💡 Suggestions:".blue());
        eprintln!("   • Check that [session] store_path and [logging] log_file are writable");
    } else if error_str.contains("configuration") {
        eprintln!("{}", "💡 Suggestions:".blue());
        eprintln!("   • Check the file passed with --config");
        eprintln!("   • Remove the [provider] section to fall back to the defaults");
    }
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("static pattern compiles"))
}

/// Turn chat markup back into terminal text.
///
/// Line breaks and list items become newlines, items of an unordered list get
/// a bullet, and entities are decoded.
pub fn to_plain_text(markup: &str) -> String {
    let bullet = if markup.starts_with(UNORDERED_LIST_OPEN) {
        "• "
    } else {
        ""
    };

    let text = markup
        .replace("<li>", &format!("\n{}", bullet))
        .replace("</li>", "")
        .replace("<br/>", "\n");
    let text = tag_pattern().replace_all(&text, "");

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Prefix for a line written by the assistant.
pub fn bot_prefix(name: &str) -> String {
    format!("{}:", name).cyan().bold().to_string()
}

/// Render per-topic scores, highest first, skipping zeros.
pub fn format_scores(scores: &[TopicScore]) -> Vec<String> {
    let mut hits: Vec<&TopicScore> = scores.iter().filter(|s| s.matches > 0).collect();
    hits.sort_by(|a, b| b.matches.cmp(&a.matches));

    hits.into_iter()
        .map(|s| format!("  {:<16} {}", s.label.as_str(), s.matches))
        .collect()
}
