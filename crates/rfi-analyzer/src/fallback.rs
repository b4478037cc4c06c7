//! Keyword-heuristic fallback classifier
//!
//! Used when no LLM is configured or the LLM call fails. Deterministic,
//! no I/O, no network: the same text always yields the same analysis.
//!
//! Sentence segmentation is a documented heuristic (split on `.`, `!`,
//! `?` followed by whitespace or end of input); abbreviations may
//! over-split. Decimals do not, since the digit after the period is not
//! whitespace.

use crate::analysis::Analysis;
use crate::config::{AnalyzerConfig, KeywordTables};
use lazy_static::lazy_static;
use regex::Regex;
use rfi_domain::{action, Action, Priority};

lazy_static! {
    static ref NUMERIC_TIMEFRAME: Regex =
        Regex::new(r"(?i)\b(\d+)\s+(day|week|month|quarter|year)s?\b").unwrap();
    static ref BY_DATE: Regex = Regex::new(
        r"(?i)\bby\s+((?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2}(?:,\s*\d{4})?|\d{4}-\d{2}-\d{2})"
    )
    .unwrap();
    static ref RELATIVE_QUARTER: Regex =
        Regex::new(r"(?i)\b(?:this|next|current)\s+quarter\b").unwrap();
}

/// Analyze text with the keyword tables from `config`
///
/// Empty or whitespace-only text yields an empty analysis, never an
/// error. No upper bound is placed on the number of candidate actions;
/// long documents may produce many low-confidence entries, which is the
/// designed role of this low-fidelity fallback.
pub fn analyze(text: &str, config: &AnalyzerConfig) -> Analysis {
    if text.trim().is_empty() {
        return Analysis::default();
    }

    let themes = extract_themes(text, &config.tables);
    let actions = extract_actions(text, config);
    let summary = format!(
        "Keyword analysis identified {} themes and {} actions.",
        themes.len(),
        actions.len()
    );

    Analysis {
        themes,
        actions,
        summary,
    }
}

/// Match any theme-lexicon keyword against the whole text
///
/// Labels are ordered by the position of their first appearance;
/// duplicates (two keywords mapping to the same label) collapse to the
/// earliest hit.
fn extract_themes(text: &str, tables: &KeywordTables) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut hits: Vec<(usize, &str)> = Vec::new();

    for entry in &tables.theme_lexicon {
        if let Some(pos) = lower.find(&entry.keyword.to_lowercase()) {
            hits.push((pos, entry.theme.as_str()));
        }
    }

    hits.sort_by_key(|&(pos, _)| pos);

    let mut themes: Vec<String> = Vec::new();
    for (_, theme) in hits {
        if !themes.iter().any(|t| t == theme) {
            themes.push(theme.to_string());
        }
    }
    themes
}

fn extract_actions(text: &str, config: &AnalyzerConfig) -> Vec<Action> {
    let tables = &config.tables;
    let action_re = match word_regex(&tables.action_indicators) {
        Some(re) => re,
        None => return Vec::new(),
    };
    let urgency_re = word_regex(&tables.urgency_words);

    let mut actions = Vec::new();
    for sentence in split_sentences(text) {
        if sentence.chars().count() <= config.min_sentence_len {
            continue;
        }
        if !action_re.is_match(sentence) {
            continue;
        }

        let priority = match &urgency_re {
            Some(re) if re.is_match(sentence) => Priority::High,
            _ => Priority::Medium,
        };

        let timeframe = extract_timeframe(sentence)
            .unwrap_or_else(|| action::TIMEFRAME_NOT_SPECIFIED.to_string());

        actions.push(Action {
            description: truncate_chars(sentence, config.max_action_len),
            timeframe,
            priority,
            category: category_for(sentence, tables),
        });
    }
    actions
}

/// First theme-lexicon label matched inside the sentence, or "General"
fn category_for(sentence: &str, tables: &KeywordTables) -> String {
    extract_themes(sentence, tables)
        .into_iter()
        .next()
        .unwrap_or_else(|| action::CATEGORY_GENERAL.to_string())
}

/// Pull a timeframe phrase out of a sentence, first match wins
fn extract_timeframe(sentence: &str) -> Option<String> {
    if let Some(caps) = NUMERIC_TIMEFRAME.captures(sentence) {
        let count = &caps[1];
        let unit = caps[2].to_lowercase();
        let formatted = if count == "1" {
            format!("{} {}", count, unit)
        } else {
            format!("{} {}s", count, unit)
        };
        return Some(formatted);
    }

    if let Some(caps) = BY_DATE.captures(sentence) {
        return Some(format!("By {}", &caps[1]));
    }

    if let Some(m) = RELATIVE_QUARTER.find(sentence) {
        return Some(m.as_str().to_string());
    }

    if sentence.to_lowercase().contains("deadline") {
        return Some("Deadline noted".to_string());
    }

    None
}

/// Compile a case-insensitive alternation from a word list
///
/// Matches are anchored at a word start so inflected forms count
/// ("implemented", "delivers") but embedded occurrences ("preview" for
/// "view") do not.
fn word_regex(words: &[String]) -> Option<Regex> {
    if words.is_empty() {
        return None;
    }
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})", alternation)).ok()
}

/// Split text into sentences on terminating punctuation
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            let at_boundary = match chars.peek() {
                None => true,
                Some(&(_, next)) => next.is_whitespace(),
            };
            if at_boundary {
                let end = i + c.len_utf8();
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end;
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Truncate a string to at most `max` characters on a char boundary
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
