// file: src/generator/groq.rs
// description: Groq chat completions client
// reference: https://console.groq.com/docs/api-reference#chat-create

use crate::config::GenerationConfig;
use crate::error::{AssistantError, Result};
use crate::generator::{ChatMessage, CompletionClient, CompletionRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct GroqChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct GroqChatClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl GroqChatClient {
    pub fn new(config: &GenerationConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AssistantError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for GroqChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AssistantError::Config(
                "Groq API key is not set (GROQ_API_KEY or generation.api_key)".to_string(),
            )
        })?;

        let body = GroqChatRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            "Requesting completion from {} ({} messages)",
            self.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AssistantError::Completion(format!("Failed to send Groq API request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Completion(format!(
                "Groq API request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: GroqChatResponse = response.json().await.map_err(|e| {
            AssistantError::Completion(format!("Failed to parse Groq API response: {}", e))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| {
                AssistantError::Completion("No completion returned from Groq API".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_missing_api_key_is_reported() {
        let mut config = Config::default_config();
        config.generation.api_key = None;
        let client = GroqChatClient::new(&config.generation, Duration::from_secs(1)).unwrap();

        let request = CompletionRequest {
            messages: vec![ChatMessage::user("hi")],
            temperature: 0.3,
            max_tokens: 10,
        };

        let err = client.complete(&request).await.unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("question")];
        let body = GroqChatRequest {
            model: "llama-3.3-70b-versatile",
            messages: &messages,
            temperature: 0.25,
            max_tokens: 300,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "question");
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["temperature"], 0.25);
    }
}
