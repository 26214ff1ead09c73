//! Bias Insights — chart-ready aggregates over a `BiasReport`.
//!
//! Pure functions, no model call. Feeds the dashboard's category bar chart,
//! severity breakdown, and "most frequent suspicious words" panel.

use std::collections::HashMap;

use serde::Serialize;

use crate::analysis::models::{BiasReport, Severity};

const TOP_WORDS_LIMIT: usize = 10;
const MIN_WORD_LEN: usize = 4;
const STOP_WORDS: [&str; 12] = [
    "this", "that", "with", "have", "will", "they", "what", "your", "from", "were", "been",
    "said",
];
const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']'];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub bias_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BiasInsights {
    /// Descending by count, ties in order of first appearance.
    pub category_counts: Vec<CategoryCount>,
    /// Always all four severities, Low → Unknown.
    pub severity_counts: Vec<SeverityCount>,
    pub suspicious_phrases: Vec<String>,
    pub top_words: Vec<WordCount>,
}

impl BiasInsights {
    pub fn from_report(report: &BiasReport) -> Self {
        let category_counts = rank(report.bias_items.iter().map(|i| i.bias_type.as_str()))
            .into_iter()
            .map(|(bias_type, count)| CategoryCount { bias_type, count })
            .collect();

        let severity_counts = Severity::ALL
            .iter()
            .map(|severity| SeverityCount {
                severity: *severity,
                count: report
                    .bias_items
                    .iter()
                    .filter(|i| i.severity == *severity)
                    .count(),
            })
            .collect();

        let suspicious_phrases: Vec<String> = report
            .bias_items
            .iter()
            .map(|i| i.example_phrase.as_str())
            .filter(|p| !p.trim().is_empty())
            .map(String::from)
            .collect();

        let top_words = top_words(&suspicious_phrases);

        Self {
            category_counts,
            severity_counts,
            suspicious_phrases,
            top_words,
        }
    }
}

/// Length and stop-word checks run on the raw token, punctuation is trimmed after.
fn top_words(phrases: &[String]) -> Vec<WordCount> {
    let lowered: Vec<String> = phrases.iter().map(|p| p.to_lowercase()).collect();
    let words = lowered
        .iter()
        .flat_map(|p| p.split_whitespace())
        .filter(|w| w.chars().count() >= MIN_WORD_LEN && !STOP_WORDS.contains(w))
        .map(|w| w.trim_matches(TRIM_CHARS))
        .filter(|w| !w.is_empty());

    rank(words)
        .into_iter()
        .take(TOP_WORDS_LIMIT)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Counts occurrences; stable sort keeps first-seen order among equal counts.
fn rank<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|v| (v.to_string(), counts[v]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
