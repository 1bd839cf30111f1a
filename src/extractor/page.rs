// file: src/extractor/page.rs
// description: fetches a result page and reduces it to an excerpt
// reference: https://docs.rs/reqwest

use crate::config::{ExtractionConfig, HttpConfig};
use crate::error::Result;
use crate::extractor::sentences::SentenceExtractor;
use crate::models::{SearchResult, SourceExcerpt};
use crate::utils::http::{build_http_client, fetch_html};
use reqwest::Client;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct PageExtractor {
    client: Client,
    sentences: SentenceExtractor,
}

impl PageExtractor {
    pub fn new(http: &HttpConfig, extraction: &ExtractionConfig) -> Result<Self> {
        Ok(Self::with_client(build_http_client(http)?, extraction))
    }

    pub fn with_client(client: Client, extraction: &ExtractionConfig) -> Self {
        Self {
            client,
            sentences: SentenceExtractor::new(extraction),
        }
    }

    pub async fn try_extract(&self, url: &str) -> Result<String> {
        let html = fetch_html(&self.client, url).await?;
        let excerpt = self.sentences.extract_from_html(&html);
        debug!("Extracted {} chars from {}", excerpt.len(), url);
        Ok(excerpt)
    }

    /// Excerpt for `url`, or empty text when the page cannot be fetched.
    pub async fn extract(&self, url: &str) -> String {
        match self.try_extract(url).await {
            Ok(excerpt) => excerpt,
            Err(e) => {
                warn!("Text extraction error from {}: {}", url, e);
                String::new()
            }
        }
    }

    pub async fn excerpt_for(&self, result: &SearchResult) -> SourceExcerpt {
        match self.try_extract(&result.link).await {
            Ok(excerpt) => SourceExcerpt::extracted(result, excerpt),
            Err(e) => {
                warn!("Text extraction error from {}: {}", result.link, e);
                SourceExcerpt::failed(result, e.to_string())
            }
        }
    }
}
