//! Tokenization helpers shared by the keyword and readability analyzers.
//!
//! All lengths are counted in chars. Keyword matching is always literal;
//! user input is never compiled into a pattern.

use regex::Regex;
use std::sync::OnceLock;

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence regex"))
}

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\n+").expect("valid paragraph regex"))
}

fn subheading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#{2,6}\s+").expect("valid heading regex"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Whitespace-delimited, non-empty tokens.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Segments between runs of `.`, `!` and `?` that contain more than whitespace.
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_break()
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Segments between runs of two or more newlines that contain more than whitespace.
pub fn paragraphs(text: &str) -> Vec<&str> {
    paragraph_break()
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Text before the first blank line, or before the first period when there
/// is no non-empty text ahead of a blank line.
pub fn first_paragraph(text: &str) -> &str {
    match text.find("\n\n") {
        Some(end) if end > 0 => &text[..end],
        _ => text.split('.').next().unwrap_or_default(),
    }
}

/// True when a line starts with an `##`-`######` markdown heading.
pub fn has_subheadings(text: &str) -> bool {
    subheading().is_match(text)
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Case-insensitive literal substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive count of non-overlapping literal occurrences.
pub fn count_ignore_case(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_lowercase()
        .matches(needle.to_lowercase().as_str())
        .count()
}

/// Replace each run of whitespace with a single hyphen, as a slug would.
pub fn hyphenate(text: &str) -> String {
    whitespace_run().replace_all(text, "-").into_owned()
}

/// Round half up to `decimals` places (`-12.25` rounds to `-12.2`).
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}
