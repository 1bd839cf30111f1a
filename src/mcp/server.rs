// file: src/mcp/server.rs
// description: MCP server exposing the assistant as agentic tools
// reference: https://docs.rs/rmcp

use crate::pipeline::Assistant;
use crate::query::Classification;
use crate::search::SearchOutcome;
use crate::utils::validation::Validator;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AskRequest {
    /// The user's message
    pub message: String,
    /// Earlier turns of the conversation, oldest first
    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct WebSearchRequest {
    /// Search query text
    pub query: String,
    /// Maximum number of results to return
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractPageRequest {
    /// Absolute http(s) URL of the page
    pub url: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClassifyRequest {
    /// Query to classify
    pub query: String,
}

#[derive(Clone)]
pub struct AssistantMcp {
    assistant: Arc<Assistant>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AssistantMcp {
    pub fn new(assistant: Arc<Assistant>) -> Self {
        Self {
            assistant,
            tool_router: Self::tool_router(),
        }
    }

    pub fn get_tool_router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "Answer a chat message, searching the web and reading the top results when the message needs it.")]
    async fn ask(
        &self,
        Parameters(request): Parameters<AskRequest>,
    ) -> Result<CallToolResult, McpError> {
        info!("MCP: ask ({} history turns)", request.history.len());

        let reply = self
            .assistant
            .respond_with_history(&request.message, &request.history)
            .await;

        Ok(CallToolResult::success(vec![
            Content::text(reply.answer.clone()),
            Content::json(&reply)?,
        ]))
    }

    #[tool(description = "Search the web and return result titles and links")]
    async fn web_search(
        &self,
        Parameters(request): Parameters<WebSearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        info!("MCP: web_search for {}", request.query);

        Validator::validate_query(&request.query)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        match self.assistant.search_provider().search(&request.query).await {
            SearchOutcome::Results(mut results) => {
                if let Some(limit) = request.limit {
                    results.truncate(limit);
                }
                let text = results
                    .iter()
                    .enumerate()
                    .map(|(idx, r)| format!("{}. {}", idx + 1, r.format_summary()))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(CallToolResult::success(vec![
                    Content::text(text),
                    Content::json(&results)?,
                ]))
            }
            SearchOutcome::NoResults => Ok(CallToolResult::success(vec![Content::text(
                "No search results found.",
            )])),
            SearchOutcome::Failed(reason) => Ok(CallToolResult::error(vec![Content::text(
                format!("Search failed: {}", reason),
            )])),
        }
    }

    #[tool(description = "Fetch a web page and return its most informative sentences")]
    async fn extract_page(
        &self,
        Parameters(request): Parameters<ExtractPageRequest>,
    ) -> Result<CallToolResult, McpError> {
        info!("MCP: extract_page {}", request.url);

        Validator::validate_url(&request.url)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        match self.assistant.assembler().extractor().try_extract(&request.url).await {
            Ok(excerpt) if excerpt.is_empty() => Ok(CallToolResult::success(vec![Content::text(
                "The page has no informative sentences.",
            )])),
            Ok(excerpt) => Ok(CallToolResult::success(vec![Content::text(excerpt)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Extraction failed: {}",
                e
            ))])),
        }
    }

    #[tool(description = "Report whether a query would trigger a web search, and why")]
    async fn classify_query(
        &self,
        Parameters(request): Parameters<ClassifyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let classification = self.assistant.classifier().classification(&request.query);

        let text = match classification {
            Classification::Greeting => "greeting: no search".to_string(),
            Classification::Direct => "direct: answered without search".to_string(),
            Classification::NeedsSearch(trigger) => format!("search: {:?}", trigger),
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for AssistantMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Web-assisted question answering. Use `ask` for answers grounded in live web results."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
