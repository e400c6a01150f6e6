//! Keyword-frequency query classifier.
//!
//! Matching is plain substring containment on the lower-cased query, so
//! "careers" counts for "career" and "paycheck" counts for "pay".

use crate::chat::topic::{TopicLabel, RULES};
use serde::Serialize;

/// Match count of one label for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicScore {
    /// The scored label.
    pub label: TopicLabel,
    /// Number of its keywords found in the query.
    pub matches: usize,
}

fn count_matches(normalized: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| normalized.contains(*keyword))
        .count()
}

/// Per-label match counts in rule-table order.
pub fn score(query: &str) -> Vec<TopicScore> {
    let normalized = query.to_lowercase();
    RULES
        .iter()
        .map(|rule| TopicScore {
            label: rule.label,
            matches: count_matches(&normalized, rule.keywords),
        })
        .collect()
}

/// Route a query to exactly one topic label.
///
/// The first label to reach a strictly higher count than every label before
/// it wins; a query matching nothing is `general`.
pub fn classify(query: &str) -> TopicLabel {
    let normalized = query.to_lowercase();

    let mut best = TopicLabel::General;
    let mut highest = 0;

    for rule in RULES.iter() {
        let matches = count_matches(&normalized, rule.keywords);
        if matches > highest {
            highest = matches;
            best = rule.label;
        }
    }

    tracing::debug!(label = best.as_str(), matches = highest, "query classified");
    best
}
