// file: src/pipeline/assistant.rs
// description: coordinates classification, search, extraction, generation, and formatting
// reference: orchestrates the asynchronous question answering workflow

use crate::config::Config;
use crate::error::Result;
use crate::extractor::PageExtractor;
use crate::formatter::ResponseFormatter;
use crate::generator::answer::error_message;
use crate::generator::{AnswerGenerator, CompletionClient, GroqChatClient};
use crate::models::SourceExcerpt;
use crate::pipeline::context::ContextAssembler;
use crate::pipeline::progress::{QuerySpinner, QueryStats};
use crate::query::{Classification, QueryClassifier};
use crate::search::{DuckDuckGoClient, SearchOutcome, SearchProvider};
use crate::utils::http::build_http_client;
use crate::utils::validation::Validator;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

pub const NO_RESULTS_MESSAGE: &str = "No search results found.";

/// How a reply was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    Rejected,
    Greeting,
    Direct,
    Searched,
    NoResults,
    SearchFailed,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub request_id: Uuid,
    pub answer: String,
    pub route: Route,
    pub sources: Vec<SourceExcerpt>,
    pub stats: QueryStats,
}

impl AssistantReply {
    fn without_sources(request_id: Uuid, answer: String, route: Route, started: Instant) -> Self {
        Self {
            request_id,
            answer,
            route,
            sources: Vec::new(),
            stats: QueryStats {
                elapsed_ms: started.elapsed().as_millis() as u64,
                ..QueryStats::default()
            },
        }
    }
}

pub struct Assistant {
    classifier: QueryClassifier,
    search: Arc<dyn SearchProvider>,
    assembler: ContextAssembler,
    generator: AnswerGenerator,
    formatter: Option<ResponseFormatter>,
    classify_queries: bool,
    greeting: String,
}

impl Assistant {
    /// Wire the production collaborators: DuckDuckGo search, shared page
    /// fetcher, and the Groq completion client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_http_client(&config.http)?;
        let search = DuckDuckGoClient::with_client(http.clone(), &config.search);
        let extractor = PageExtractor::with_client(http, &config.extraction);
        let completion = GroqChatClient::new(
            &config.generation,
            Duration::from_secs(config.http.timeout_secs),
        )?;

        Ok(Self::new(
            config,
            Arc::new(search),
            extractor,
            Arc::new(completion),
        ))
    }

    pub fn new(
        config: &Config,
        search: Arc<dyn SearchProvider>,
        extractor: PageExtractor,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            classifier: QueryClassifier::new(),
            search,
            assembler: ContextAssembler::new(extractor, config.extraction.concurrency),
            generator: AnswerGenerator::new(completion, &config.generation),
            formatter: config
                .assistant
                .format_markdown
                .then(ResponseFormatter::new),
            classify_queries: config.assistant.classify_queries,
            greeting: config.assistant.greeting.clone(),
        }
    }

    pub fn classifier(&self) -> &QueryClassifier {
        &self.classifier
    }

    pub fn search_provider(&self) -> &Arc<dyn SearchProvider> {
        &self.search
    }

    pub fn assembler(&self) -> &ContextAssembler {
        &self.assembler
    }

    pub async fn respond(&self, query: &str) -> AssistantReply {
        self.respond_tracked(query, None).await
    }

    /// Chat-callback entry point. Prior turns are accepted but not used.
    pub async fn respond_with_history(&self, message: &str, history: &[String]) -> AssistantReply {
        debug!("Ignoring {} prior turns of history", history.len());
        self.respond(message).await
    }

    pub async fn respond_tracked(&self, query: &str, spinner: Option<&QuerySpinner>) -> AssistantReply {
        let request_id = Uuid::new_v4();
        let span = info_span!("query", request_id = %request_id);

        self.run(request_id, query.trim(), spinner)
            .instrument(span)
            .await
    }

    async fn run(&self, request_id: Uuid, query: &str, spinner: Option<&QuerySpinner>) -> AssistantReply {
        let started = Instant::now();

        if let Err(e) = Validator::validate_query(query) {
            warn!("Rejected query: {}", e);
            return AssistantReply::without_sources(request_id, e.to_string(), Route::Rejected, started);
        }

        if self.classify_queries {
            match self.classifier.classification(query) {
                Classification::Greeting => {
                    info!("Greeting detected, skipping search");
                    return AssistantReply::without_sources(
                        request_id,
                        self.greeting.clone(),
                        Route::Greeting,
                        started,
                    );
                }
                Classification::Direct => {
                    info!("Query does not need web search");
                    stage(spinner, "Thinking");
                    let answer = self.finish_answer(self.generator.try_answer_directly(query).await);
                    return AssistantReply::without_sources(request_id, answer, Route::Direct, started);
                }
                Classification::NeedsSearch(trigger) => {
                    debug!("Searching because of {:?}", trigger);
                }
            }
        }

        stage(spinner, "Searching the web");
        let results = match self.search.search(query).await {
            SearchOutcome::Results(results) => results,
            SearchOutcome::NoResults => {
                info!("No search results for \"{}\"", query);
                return AssistantReply::without_sources(
                    request_id,
                    NO_RESULTS_MESSAGE.to_string(),
                    Route::NoResults,
                    started,
                );
            }
            SearchOutcome::Failed(reason) => {
                return AssistantReply::without_sources(
                    request_id,
                    format!("Web search is unavailable right now: {}", reason),
                    Route::SearchFailed,
                    started,
                );
            }
        };

        let bundle = self.assembler.assemble_tracked(query, &results, spinner).await;
        let context = bundle.render();

        stage(spinner, "Generating answer");
        let answer = self.finish_answer(self.generator.try_generate(query, &context).await);

        let stats = QueryStats::from_bundle(&bundle, context.chars().count(), started);
        info!(
            "Answered from {} sources ({} with text, {:.0}%, {} context chars) in {} ms",
            stats.sources,
            stats.non_empty_excerpts,
            stats.extraction_rate(),
            stats.context_chars,
            stats.elapsed_ms
        );

        AssistantReply {
            request_id,
            answer,
            route: Route::Searched,
            sources: bundle.sources,
            stats,
        }
    }

    /// Errors become a displayable message and skip the formatting pass.
    fn finish_answer(&self, answer: Result<String>) -> String {
        match (answer, &self.formatter) {
            (Ok(answer), Some(formatter)) => formatter.format(&answer),
            (Ok(answer), None) => answer,
            (Err(e), _) => {
                if e.is_upstream() {
                    warn!("Completion service failed: {}", e);
                } else {
                    error!("Answer generation failed: {}", e);
                }
                error_message(&e)
            }
        }
    }
}

fn stage(spinner: Option<&QuerySpinner>, message: &str) {
    if let Some(spinner) = spinner {
        spinner.set_stage(message);
    }
}
