// file: src/generator/answer.rs
// description: builds prompts and turns completions into displayable answers
// reference: retrieval augmented generation over a chat-completion api

use crate::config::GenerationConfig;
use crate::error::{AssistantError, Result};
use crate::generator::{ChatMessage, CompletionClient, CompletionRequest, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, error};

pub struct AnswerGenerator {
    client: Arc<dyn CompletionClient>,
    template: PromptTemplate,
    temperature: f32,
    max_tokens: u32,
}

impl AnswerGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, config: &GenerationConfig) -> Self {
        Self {
            client,
            template: PromptTemplate::new(config.prompt_style),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn context_request(&self, query: &str, context: &str) -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system(self.template.system_message()),
                ChatMessage::user(self.template.context_prompt(query, context)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn direct_request(&self, query: &str) -> CompletionRequest {
        CompletionRequest {
            messages: vec![
                ChatMessage::system(self.template.system_message()),
                ChatMessage::user(self.template.direct_prompt(query)),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub async fn try_generate(&self, query: &str, context: &str) -> Result<String> {
        debug!("Generating answer with {} chars of context", context.len());
        self.client.complete(&self.context_request(query, context)).await
    }

    /// Answer grounded in `context`; failures come back as an error message.
    pub async fn generate(&self, query: &str, context: &str) -> String {
        displayable(self.try_generate(query, context).await)
    }

    pub async fn try_answer_directly(&self, query: &str) -> Result<String> {
        self.client.complete(&self.direct_request(query)).await
    }

    /// Answer without web context, for queries that skip search.
    pub async fn answer_directly(&self, query: &str) -> String {
        displayable(self.try_answer_directly(query).await)
    }
}

pub fn error_message(e: &AssistantError) -> String {
    format!("Error generating response: {}", e)
}

fn displayable(result: Result<String>) -> String {
    match result {
        Ok(answer) => answer,
        Err(e) => {
            error!("Answer generation failed: {}", e);
            error_message(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, PromptStyle};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        requests: Mutex<Vec<CompletionRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                Err(AssistantError::Completion("401 invalid api key".to_string()))
            } else {
                Ok("Entropy is a measure of disorder.".to_string())
            }
        }
    }

    #[tokio::test]
    async fn test_generate_sends_context_and_settings() {
        let client = Arc::new(RecordingClient::default());
        let config = Config::default_config();
        let generator = AnswerGenerator::new(client.clone(), &config.generation);

        let answer = generator.generate("what is entropy", "Source: A\ntext\n\n").await;
        assert_eq!(answer, "Entropy is a measure of disorder.");

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[0].role, "system");
        assert!(requests[0].messages[1].content.contains("Source: A"));
        assert_eq!(requests[0].temperature, 0.3);
        assert_eq!(requests[0].max_tokens, 300);
    }

    #[tokio::test]
    async fn test_generate_failure_becomes_message() {
        let client = Arc::new(RecordingClient {
            fail: true,
            ..Default::default()
        });
        let mut config = Config::default_config();
        config.generation.prompt_style = PromptStyle::Concise;
        let generator = AnswerGenerator::new(client, &config.generation);

        let answer = generator.generate("q", "ctx").await;
        assert!(answer.starts_with("Error generating response:"));
        assert!(answer.contains("401 invalid api key"));

        assert!(generator.try_generate("q", "ctx").await.is_err());
    }

    #[tokio::test]
    async fn test_direct_answer_has_no_context_block() {
        let client = Arc::new(RecordingClient::default());
        let config = Config::default_config();
        let generator = AnswerGenerator::new(client.clone(), &config.generation);

        generator.answer_directly("rust lifetimes").await;

        let requests = client.requests.lock().unwrap();
        assert!(!requests[0].messages[1].content.contains("Context"));
        assert!(requests[0].messages[1].content.contains("rust lifetimes"));
    }
}
