// file: src/search/mod.rs
// description: web search abstraction and outcome type
// reference: internal module structure

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoClient;

use crate::error::Result;
use crate::models::SearchResult;
use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

/// Result of one search request. An empty result page and an unreachable
/// provider are reported differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    Results(Vec<SearchResult>),
    NoResults,
    Failed(String),
}

impl SearchOutcome {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Results(results) => results,
            _ => &[],
        }
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Results(results) => results,
            _ => Vec::new(),
        }
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Run the query, returning at most the provider's configured number of results.
    async fn fetch_results(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Like `fetch_results` but never fails: errors become `SearchOutcome::Failed`.
    async fn search(&self, query: &str) -> SearchOutcome {
        match self.fetch_results(query).await {
            Ok(results) if results.is_empty() => SearchOutcome::NoResults,
            Ok(results) => SearchOutcome::Results(results),
            Err(e) => {
                warn!("Search error from {}: {}", self.name(), e);
                SearchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssistantError;

    struct StaticProvider(std::result::Result<Vec<SearchResult>, u16>);

    #[async_trait]
    impl SearchProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch_results(&self, _query: &str) -> Result<Vec<SearchResult>> {
            self.0.clone().map_err(|status| AssistantError::Status {
                url: "https://search.test".to_string(),
                status,
            })
        }
    }

    #[tokio::test]
    async fn test_outcome_distinguishes_empty_from_failed() {
        let empty = StaticProvider(Ok(vec![]));
        assert_eq!(empty.search("q").await, SearchOutcome::NoResults);

        let failing = StaticProvider(Err(500));
        let outcome = failing.search("q").await;
        assert!(matches!(outcome, SearchOutcome::Failed(ref msg) if msg.contains("500")));
        assert!(outcome.results().is_empty());
    }

    #[test]
    fn test_outcome_carries_results() {
        let result = SearchResult::new("Rust", "https://www.rust-lang.org").unwrap();
        let provider = StaticProvider(Ok(vec![result.clone()]));

        let outcome = tokio_test::block_on(provider.search("rust"));
        assert_eq!(outcome.results(), &[result.clone()]);
        assert_eq!(outcome.into_results(), vec![result]);
    }
}
