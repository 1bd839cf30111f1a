// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AssistantError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Environment variables consulted for the Groq key when the config leaves it unset.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GROQ_API_KEY", "Groq_Api_key"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub http: HttpConfig,
    pub search: SearchConfig,
    pub extraction: ExtractionConfig,
    pub generation: GenerationConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub max_sentences: usize,
    pub min_words: usize,
    pub max_chars: usize,
    pub concurrency: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub prompt_style: PromptStyle,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    pub classify_queries: bool,
    pub format_markdown: bool,
    pub greeting: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Comprehensive, 3-5 sentence answers grounded in the context.
    Detailed,
    /// A single short paragraph.
    Concise,
}

/// Named presets reproducing the three front-end flavours of the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    Cli,
    Chat,
    ChatHeuristic,
}

impl Profile {
    pub fn apply(self, config: &mut Config) {
        match self {
            Profile::Cli => {
                config.search.max_results = 5;
                config.extraction.max_sentences = 10;
                config.generation.temperature = 0.3;
                config.generation.max_tokens = 300;
                config.generation.prompt_style = PromptStyle::Detailed;
                config.assistant.classify_queries = false;
                config.assistant.format_markdown = false;
            }
            Profile::Chat => {
                config.search.max_results = 3;
                config.extraction.max_sentences = 5;
                config.generation.temperature = 0.2;
                config.generation.max_tokens = 350;
                config.generation.prompt_style = PromptStyle::Concise;
                config.assistant.classify_queries = false;
                config.assistant.format_markdown = false;
            }
            Profile::ChatHeuristic => {
                config.search.max_results = 3;
                config.extraction.max_sentences = 5;
                config.generation.temperature = 0.2;
                config.generation.max_tokens = 350;
                config.generation.prompt_style = PromptStyle::Concise;
                config.assistant.classify_queries = true;
                config.assistant.format_markdown = true;
            }
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("WEB_ASSIST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        if config.generation.api_key.is_none() {
            config.generation.api_key = api_key_from_env();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            http: HttpConfig {
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout_secs: 10,
            },
            search: SearchConfig {
                endpoint: "https://html.duckduckgo.com/html/".to_string(),
                max_results: 5,
            },
            extraction: ExtractionConfig {
                max_sentences: 10,
                min_words: 10,
                max_chars: 500,
                concurrency: 1,
            },
            generation: GenerationConfig {
                api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                api_key: None,
                model: "llama-3.3-70b-versatile".to_string(),
                temperature: 0.3,
                max_tokens: 300,
                prompt_style: PromptStyle::Detailed,
            },
            assistant: AssistantConfig {
                classify_queries: false,
                format_markdown: false,
                greeting: "Hello! Ask me anything and I'll search the web to find you an answer."
                    .to_string(),
            },
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        profile.apply(&mut self);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(AssistantError::Config(
                "search.max_results must be greater than 0".to_string(),
            ));
        }

        if self.extraction.max_sentences == 0 {
            return Err(AssistantError::Config(
                "extraction.max_sentences must be greater than 0".to_string(),
            ));
        }

        if self.extraction.concurrency == 0 {
            return Err(AssistantError::Config(
                "extraction.concurrency must be greater than 0".to_string(),
            ));
        }

        if self.http.timeout_secs == 0 {
            return Err(AssistantError::Config(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(AssistantError::Config(format!(
                "generation.temperature must be within 0.0..=2.0, got {}",
                self.generation.temperature
            )));
        }

        Ok(())
    }
}

fn api_key_from_env() -> Option<String> {
    api_key_from(|key| std::env::var(key).ok())
}

fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.extraction.max_sentences, 10);
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_chat_heuristic_profile() {
        let config = Config::default_config().with_profile(Profile::ChatHeuristic);
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.extraction.max_sentences, 5);
        assert_eq!(config.generation.prompt_style, PromptStyle::Concise);
        assert!(config.assistant.classify_queries);
        assert!(config.assistant.format_markdown);
    }

    #[test]
    fn test_chat_profile_does_not_classify() {
        let config = Config::default_config().with_profile(Profile::Chat);
        assert!(!config.assistant.classify_queries);
        assert!(!config.assistant.format_markdown);
    }

    #[test]
    fn test_validate_rejects_zero_results() {
        let mut config = Config::default_config();
        config.search.max_results = 0;
        assert!(matches!(config.validate(), Err(AssistantError::Config(_))));
    }

    #[test]
    fn test_load_without_file_keeps_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.search.endpoint, "https://html.duckduckgo.com/html/");
        assert_eq!(config.http.timeout_secs, 10);
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_api_key_lookup_order() {
        assert_eq!(
            api_key_from(env(&[("GROQ_API_KEY", "gsk_primary"), ("Groq_Api_key", "gsk_legacy")])),
            Some("gsk_primary".to_string())
        );
        assert_eq!(
            api_key_from(env(&[("GROQ_API_KEY", "  "), ("Groq_Api_key", " gsk_legacy ")])),
            Some("gsk_legacy".to_string())
        );
        assert_eq!(api_key_from(env(&[])), None);
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::default_config();
        config.generation.temperature = 3.5;
        assert!(config.validate().is_err());
    }
}
