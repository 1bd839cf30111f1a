// file: src/query/patterns.rs
// description: compiled regex patterns for query classification
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

/// Phrases that signal an information request regardless of query length.
pub const INDICATOR_PHRASES: [&str; 8] = [
    "tell me about",
    "explain",
    "what is",
    "who is",
    "how does",
    "why do",
    "describe",
    "information about",
];

lazy_static! {
    // Greetings and courtesies, anchored at the start of a normalized query.
    // Trailing letters may repeat ("hiii", "heyyy", "thanksss") and the match
    // must end at whitespace, punctuation, or the end of the query.
    pub static ref GREETING: Regex = Regex::new(
        r"(?i)^(?:h+i+|h+e+l+o+|h+e+y+|good\s+(?:morning|afternoon|evening)|how\s+are\s+(?:y+o+u+|u+)|what(?:'|’)?s\s+u+p+|s+u+p+|y+o+|greetings+|thanks+|thank\s+(?:y+o+u+|u+)|c+o+l+|n+i+c+e+)(?:[\s!.,?]|$)"
    ).expect("GREETING regex is valid");

    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("WHITESPACE regex is valid");
}

pub fn is_greeting(normalized: &str) -> bool {
    GREETING.is_match(normalized)
}

pub fn find_indicator(normalized: &str) -> Option<&'static str> {
    INDICATOR_PHRASES
        .iter()
        .copied()
        .find(|phrase| normalized.contains(phrase))
}

pub fn normalize(query: &str) -> String {
    WHITESPACE
        .replace_all(query.trim(), " ")
        .to_lowercase()
}
