// file: src/search/duckduckgo.rs
// description: DuckDuckGo html endpoint search client
// reference: https://html.duckduckgo.com/html/

use crate::config::{HttpConfig, SearchConfig};
use crate::error::{AssistantError, Result};
use crate::models::SearchResult;
use crate::search::SearchProvider;
use crate::utils::http::{build_http_client, fetch_html};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info};

/// CSS selector for result title anchors in the html endpoint's markup.
pub const RESULT_SELECTOR: &str = "a.result__a";

#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    client: Client,
    endpoint: String,
    max_results: usize,
}

impl DuckDuckGoClient {
    pub fn new(http: &HttpConfig, search: &SearchConfig) -> Result<Self> {
        Ok(Self::with_client(build_http_client(http)?, search))
    }

    pub fn with_client(client: Client, search: &SearchConfig) -> Self {
        Self {
            client,
            endpoint: search.endpoint.clone(),
            max_results: search.max_results,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn query_url(&self, query: &str) -> String {
        format!("{}?q={}", self.endpoint, urlencoding::encode(query))
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn fetch_results(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = self.query_url(query);
        info!("Searching DuckDuckGo for: {}", query);

        let body = fetch_html(&self.client, &url).await?;
        let results = parse_results(&body, self.max_results)?;

        debug!("DuckDuckGo returned {} usable results", results.len());
        Ok(results)
    }
}

/// Collect up to `limit` results from a result page, in document order,
/// skipping anchors without an absolute http(s) destination.
pub fn parse_results(html: &str, limit: usize) -> Result<Vec<SearchResult>> {
    let selector = Selector::parse(RESULT_SELECTOR)
        .map_err(|e| AssistantError::Serialization(format!("Invalid selector: {}", e)))?;
    let document = Html::parse_document(html);

    let results = document
        .select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let link = unwrap_redirect(href);
            if !link.starts_with("http") {
                return None;
            }
            let title = anchor.text().collect::<String>();
            SearchResult::new(title, link)
        })
        .take(limit)
        .collect();

    Ok(results)
}

const REDIRECT_PREFIXES: [&str; 3] = [
    "//duckduckgo.com/l/",
    "https://duckduckgo.com/l/",
    "http://duckduckgo.com/l/",
];

/// Result anchors may point at `//duckduckgo.com/l/?uddg=<encoded>&rut=...`;
/// return the decoded destination in that case and the href otherwise.
pub fn unwrap_redirect(href: &str) -> String {
    if !REDIRECT_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        return href.to_string();
    }

    let Some(pos) = href.find("uddg=") else {
        return href.to_string();
    };

    let encoded = &href[pos + 5..];
    let encoded = encoded.split('&').next().unwrap_or_default();
    if encoded.is_empty() {
        return href.to_string();
    }

    urlencoding::decode(encoded)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| href.to_string())
}
