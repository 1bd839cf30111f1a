// file: src/utils/validation.rs
// description: input validation for queries and urls
// reference: input validation patterns

use crate::error::{AssistantError, Result};

/// Longest query accepted from any front end.
pub const MAX_QUERY_CHARS: usize = 2000;

pub struct Validator;

impl Validator {
    pub fn validate_query(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(AssistantError::Validation("Query is empty".to_string()));
        }

        let length = query.chars().count();
        if length > MAX_QUERY_CHARS {
            return Err(AssistantError::Validation(format!(
                "Query too long ({} chars, max {})",
                length, MAX_QUERY_CHARS
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| AssistantError::InvalidUrl(format!("{}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AssistantError::InvalidUrl(format!(
                "Unsupported scheme in {}",
                url
            )));
        }

        Ok(())
    }

    pub fn is_exit_command(input: &str) -> bool {
        matches!(input.trim().to_lowercase().as_str(), "exit" | "quit" | "q")
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((offset, _)) => format!("{}...", &text[..offset]),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query() {
        assert!(Validator::validate_query("what is entropy").is_ok());
        assert!(Validator::validate_query("").is_err());
        assert!(Validator::validate_query(" \t\n").is_err());
        assert!(Validator::validate_query(&"a".repeat(MAX_QUERY_CHARS + 1)).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://example.com/path?q=1").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_exit_commands() {
        assert!(Validator::is_exit_command("exit"));
        assert!(Validator::is_exit_command(" QUIT "));
        assert!(Validator::is_exit_command("q"));
        assert!(!Validator::is_exit_command("quantum"));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("héllo wörld", 4), "héll...");
    }
}
