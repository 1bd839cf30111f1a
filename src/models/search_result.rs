// file: src/models/search_result.rs
// description: Search result model produced by the web search client
// reference: DuckDuckGo HTML result anchors (a.result__a)

use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Visible anchor text of the result
    pub title: String,

    /// Absolute http(s) URL of the result page
    pub link: String,
}

impl SearchResult {
    /// Create a search result, discarding entries whose link is not an
    /// absolute http or https URL.
    pub fn new(title: impl Into<String>, link: impl AsRef<str>) -> Option<Self> {
        let link = link.as_ref().trim();
        let parsed = Url::parse(link).ok()?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return None;
        }

        Some(Self {
            title: title.into().trim().to_string(),
            link: link.to_string(),
        })
    }

    /// Format as a single display line
    pub fn format_summary(&self) -> String {
        format!("{}\n   {}", self.title, self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_http_links() {
        let result = SearchResult::new("  Rust  ", "https://www.rust-lang.org/").unwrap();
        assert_eq!(result.title, "Rust");
        assert_eq!(result.link, "https://www.rust-lang.org/");

        assert!(SearchResult::new("Plain", "http://example.com/page").is_some());
    }

    #[test]
    fn test_rejects_relative_and_foreign_links() {
        assert!(SearchResult::new("Relative", "/l/?uddg=abc").is_none());
        assert!(SearchResult::new("Protocol relative", "//duckduckgo.com/l/").is_none());
        assert!(SearchResult::new("Ftp", "ftp://example.com/file").is_none());
        assert!(SearchResult::new("Mail", "mailto:someone@example.com").is_none());
        assert!(SearchResult::new("Garbage", "http//broken").is_none());
    }

    #[test]
    fn test_format_summary() {
        let result = SearchResult::new("Title", "https://example.com").unwrap();
        let summary = result.format_summary();
        assert!(summary.contains("Title"));
        assert!(summary.contains("https://example.com"));
    }
}
