// file: src/query/classifier.rs
// description: decides whether a query needs a web search
// reference: pattern-based query routing

use crate::query::patterns;
use serde::Serialize;

/// Queries with more tokens than this are always searched.
pub const MAX_DIRECT_TOKENS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchTrigger {
    Length(usize),
    Indicator(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Greeting,
    NeedsSearch(SearchTrigger),
    Direct,
}

impl Classification {
    pub fn needs_search(&self) -> bool {
        matches!(self, Classification::NeedsSearch(_))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryClassifier;

impl QueryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// True when the query should be answered from web search results.
    pub fn classify(&self, query: &str) -> bool {
        self.classification(query).needs_search()
    }

    pub fn classification(&self, query: &str) -> Classification {
        let normalized = patterns::normalize(query);

        if patterns::is_greeting(&normalized) {
            return Classification::Greeting;
        }

        let tokens = normalized.split_whitespace().count();
        if tokens > MAX_DIRECT_TOKENS {
            return Classification::NeedsSearch(SearchTrigger::Length(tokens));
        }

        if let Some(phrase) = patterns::find_indicator(&normalized) {
            return Classification::NeedsSearch(SearchTrigger::Indicator(phrase));
        }

        Classification::Direct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_skip_search() {
        let classifier = QueryClassifier::new();

        for query in ["hi", "Hello!!", "thanks", "HEYYY", "Good evening", "how are you?", "yo", "sup", "Supp?"] {
            assert!(!classifier.classify(query), "{query} should not search");
            assert_eq!(classifier.classification(query), Classification::Greeting);
        }
    }

    #[test]
    fn test_long_queries_search() {
        let classifier = QueryClassifier::new();

        assert_eq!(
            classifier.classification("best hiking trails near denver colorado"),
            Classification::NeedsSearch(SearchTrigger::Length(6))
        );
        assert!(classifier.classify("rust async runtime comparison benchmarks"));
    }

    #[test]
    fn test_greeting_wins_over_length() {
        let classifier = QueryClassifier::new();
        assert!(!classifier.classify("hello there my good friend how goes it"));
    }

    #[test]
    fn test_indicator_phrase_on_short_query() {
        let classifier = QueryClassifier::new();

        assert!(classifier.classify("what is entropy"));
        assert_eq!(
            classifier.classification("Explain monads"),
            Classification::NeedsSearch(SearchTrigger::Indicator("explain"))
        );
        assert!(classifier.classify("who is Ada Lovelace"));
    }

    #[test]
    fn test_short_plain_query_is_direct() {
        let classifier = QueryClassifier::new();

        assert_eq!(classifier.classification("rust lifetimes"), Classification::Direct);
        assert!(!classifier.classify("   "));
    }

    #[test]
    fn test_exactly_four_tokens_without_indicator() {
        let classifier = QueryClassifier::new();
        assert!(!classifier.classify("python list sort order"));
    }
}
