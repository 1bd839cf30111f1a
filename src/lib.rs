// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod generator;
pub mod mcp;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod search;
pub mod utils;

pub use config::{
    AssistantConfig, Config, ExtractionConfig, GenerationConfig, HttpConfig, Profile,
    PromptStyle, SearchConfig,
};
pub use error::{AssistantError, Result};
pub use extractor::{PageExtractor, SentenceExtractor};
pub use formatter::ResponseFormatter;
pub use generator::{
    AnswerGenerator, ChatMessage, CompletionClient, CompletionRequest, GroqChatClient,
};
pub use models::{ContextBundle, ExcerptStatus, SearchResult, SourceExcerpt};
pub use pipeline::{Assistant, AssistantReply, ContextAssembler, QuerySpinner, QueryStats, Route};
pub use query::{Classification, QueryClassifier, SearchTrigger};
pub use search::{DuckDuckGoClient, SearchOutcome, SearchProvider};
pub use utils::Validator;
