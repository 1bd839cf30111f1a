// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Completion API error: {0}")]
    Completion(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AssistantError {
    /// True for failures of the remote side (transport or HTTP status) as
    /// opposed to local configuration or input problems.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AssistantError::Http(_) | AssistantError::Status { .. } | AssistantError::Completion(_)
        )
    }
}
