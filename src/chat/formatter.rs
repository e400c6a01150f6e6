//! Plain text to chat-bubble markup.
//!
//! Steps run in a fixed order: escape, emphasis, list lines, list container,
//! line breaks. Escaping must come first so the tags added afterwards survive.
//! The formatter is not re-entrant: feeding its output back in escapes the
//! entities a second time.

use regex::Regex;
use std::sync::OnceLock;

/// Opening tag of the ordered-list container.
pub const ORDERED_LIST_OPEN: &str = r#"<ol class="list-decimal pl-5 space-y-1">"#;
/// Opening tag of the unordered-list container.
pub const UNORDERED_LIST_OPEN: &str = r#"<ul class="list-disc pl-5 space-y-1">"#;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static PATTERN: OnceLock<Regex> = OnceLock::new();
            PATTERN.get_or_init(|| Regex::new($pattern).expect("static pattern compiles"))
        }
    };
}

static_regex!(strong_pattern, r"\*\*([^*\n]+)\*\*");
static_regex!(em_pattern, r"\*([^*\n]+)\*");
static_regex!(numbered_line, r"^([0-9]+)\.\s?(.*)$");
static_regex!(bullet_line, r"^[•\-]\s?(.*)$");
static_regex!(numbered_marker, r"[0-9]+\.\s");

/// Replace `&`, `<` and `>` with their entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `**strong**` then `*em*`, never across a line break.
fn apply_emphasis(text: &str) -> String {
    let strong = strong_pattern().replace_all(text, "<strong>${1}</strong>");
    em_pattern()
        .replace_all(&strong, "<em>${1}</em>")
        .into_owned()
}

fn list_item(line: &str) -> Option<String> {
    if let Some(caps) = numbered_line().captures(line) {
        return Some(format!("<li>{}. {}</li>", &caps[1], &caps[2]));
    }
    bullet_line()
        .captures(line)
        .map(|caps| format!("<li>{}</li>", &caps[1]))
}

/// Turn list lines into items. A list line swallows the newline before it;
/// the newline after it is left alone.
fn apply_list_items(text: &str) -> (String, bool) {
    let mut out = String::with_capacity(text.len());
    let mut produced = false;

    for (index, line) in text.split('\n').enumerate() {
        match list_item(line) {
            Some(item) => {
                out.push_str(&item);
                produced = true;
            }
            None => {
                if index > 0 {
                    out.push('\n');
                }
                out.push_str(line);
            }
        }
    }

    (out, produced)
}

/// Format a bot or user text into markup safe to render directly.
///
/// The unescaped input decides the container: any `N. ` marker anywhere in it
/// selects an ordered list.
pub fn format_message(text: &str) -> String {
    let escaped = escape_html(text);
    let emphasized = apply_emphasis(&escaped);
    let (mut formatted, has_items) = apply_list_items(&emphasized);

    if has_items {
        formatted = if numbered_marker().is_match(text) {
            format!("{}{}</ol>", ORDERED_LIST_OPEN, formatted)
        } else {
            format!("{}{}</ul>", UNORDERED_LIST_OPEN, formatted)
        };
    }

    formatted.replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        let out = format_message("<script>alert(1)</script>");
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert!(!out.contains("<script>"));

        assert_eq!(escape_html("R&D <b>"), "R&amp;D &lt;b&gt;");
    }

    #[test]
    fn test_numbered_list_gets_one_container() {
        let out = format_message("1. a\n2. b");
        assert_eq!(
            out,
            format!("{}<li>1. a</li><li>2. b</li></ol>", ORDERED_LIST_OPEN)
        );
        assert_eq!(out.matches("<ol").count(), 1);
        assert_eq!(out.matches("<li>").count(), 2);
    }

    #[test]
    fn test_bullet_list() {
        let out = format_message("• first\n- second");
        assert_eq!(
            out,
            format!("{}<li>first</li><li>second</li></ul>", UNORDERED_LIST_OPEN)
        );
    }

    #[test]
    fn test_surrounding_text_and_line_breaks() {
        let out = format_message("Intro:\n\n1. a\n2. b\n\nOutro?");
        assert_eq!(
            out,
            format!(
                "{}Intro:<br/><li>1. a</li><li>2. b</li><br/><br/>Outro?</ol>",
                ORDERED_LIST_OPEN
            )
        );
    }

    #[test]
    fn test_plain_text_only_gets_line_breaks() {
        assert_eq!(format_message("line one\nline two"), "line one<br/>line two");
        assert_eq!(format_message(""), "");
    }

    #[test]
    fn test_numbered_marker_wins_over_bullets() {
        let out = format_message("• pick one\n1. then this");
        assert!(out.starts_with(ORDERED_LIST_OPEN));
        assert!(out.ends_with("</ol>"));
        assert_eq!(out.matches("<li>").count(), 2);

        // the marker test looks at the whole original text, not only list lines
        let out = format_message("Chapter 2. Notes\n- item");
        assert!(out.starts_with(ORDERED_LIST_OPEN));
    }

    #[test]
    fn test_only_ascii_digits_number_a_list() {
        assert_eq!(format_message("٣. item"), "٣. item");

        let out = format_message("٣. first\n- second");
        assert!(out.starts_with(UNORDERED_LIST_OPEN));
        assert_eq!(out.matches("<li>").count(), 1);
    }

    #[test]
    fn test_indented_lines_are_not_list_items() {
        let out = format_message("1. Practice:\n   - \"Why here?\"");
        assert_eq!(
            out,
            format!(
                "{}<li>1. Practice:</li><br/>   - \"Why here?\"</ol>",
                ORDERED_LIST_OPEN
            )
        );
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            format_message("**Tip**: stay *calm*"),
            "<strong>Tip</strong>: stay <em>calm</em>"
        );
        // unpaired or empty markers are left alone
        assert_eq!(format_message("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(format_message("****"), "****");
        // no emphasis across lines
        assert_eq!(format_message("*a\nb*"), "*a<br/>b*");
    }

    #[test]
    fn test_emphasis_inside_list_items_and_escaped_text() {
        let out = format_message("- **Bold** move & <plan>");
        assert_eq!(
            out,
            format!(
                "{}<li><strong>Bold</strong> move &amp; &lt;plan&gt;</li></ul>",
                UNORDERED_LIST_OPEN
            )
        );
    }

    #[test]
    fn test_model_supplied_tags_stay_inert() {
        let out = format_message("1. <img src=x onerror=alert(1)>");
        assert!(!out.contains("<img"));
        assert!(out.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_not_reentrant() {
        let once = format_message("a & b");
        assert_eq!(once, "a &amp; b");
        assert_eq!(format_message(&once), "a &amp;amp; b");
    }
}
