// file: src/utils/http.rs
// description: shared reqwest client and html fetch helper for search and page extraction
// reference: https://docs.rs/reqwest

use crate::config::HttpConfig;
use crate::error::{AssistantError, Result};
use reqwest::{Client, StatusCode};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Build the client used for every outbound scrape: browser user agent and a
/// fixed per-request timeout.
pub fn build_http_client(config: &HttpConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&config.user_agent)
            .map_err(|e| AssistantError::Config(format!("Invalid user agent: {}", e)))?,
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(AssistantError::Http)
}

/// GET a page and return its body. Anything other than 200 OK is an error.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    debug!("Fetching {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();

    if status != StatusCode::OK {
        return Err(AssistantError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_build_client_with_defaults() {
        let config = Config::default_config();
        assert!(build_http_client(&config.http).is_ok());
    }

    #[test]
    fn test_build_client_rejects_bad_user_agent() {
        let mut config = Config::default_config();
        config.http.user_agent = "bad\nagent".to_string();
        assert!(matches!(
            build_http_client(&config.http),
            Err(AssistantError::Config(_))
        ));
    }
}
