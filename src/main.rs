// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rmcp::ServiceExt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use web_assist::utils::logging::{
    format_error, format_heading, format_info, format_success, format_warning,
};
use web_assist::{
    Assistant, AssistantReply, Classification, Config, DuckDuckGoClient, PageExtractor, Profile,
    QueryClassifier, QuerySpinner, Route, SearchOutcome, SearchProvider, Validator,
    mcp::AssistantMcp,
};

#[derive(Parser)]
#[command(name = "web_assist")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Answer questions from live web search results using Groq", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Preset for result counts, prompt style, and the greeting/markdown heuristics
    #[arg(short, long, value_enum, env = "WEB_ASSIST_PROFILE")]
    profile: Option<Profile>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive question loop (default)
    Chat,

    /// Answer a single question and exit
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show the web search results for a query
    Search {
        query: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the informative sentences extracted from a page
    Extract {
        url: String,

        #[arg(short, long)]
        sentences: Option<usize>,
    },

    /// Show whether a query would trigger a web search
    Classify { query: String },

    /// Start MCP (Model Context Protocol) server for agentic tool integration
    Mcp {
        #[arg(long, default_value = "stdio")]
        transport: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    web_assist::utils::logging::init_logger(cli.color, cli.verbose);
    if !cli.color {
        colored::control::set_override(false);
    }

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load default configuration")?
    };

    if let Some(profile) = cli.profile {
        info!("Applying profile {:?}", profile);
        profile.apply(&mut config);
    }

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            cmd_chat(&config, cli.color).await?;
        }
        Commands::Ask { query } => {
            cmd_ask(&config, &query.join(" "), cli.color).await?;
        }
        Commands::Search { query, limit } => {
            cmd_search(&config, &query, limit).await?;
        }
        Commands::Extract { url, sentences } => {
            cmd_extract(&config, &url, sentences).await?;
        }
        Commands::Classify { query } => {
            cmd_classify(&query);
        }
        Commands::Mcp { transport } => {
            cmd_mcp(&config, &transport).await?;
        }
    }

    Ok(())
}

async fn cmd_chat(config: &Config, color: bool) -> Result<()> {
    let assistant = Assistant::from_config(config).context("Failed to build assistant")?;

    println!("Web-Assisted Query Answering System");
    println!("Type 'exit' to quit\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Enter your search request: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if Validator::is_exit_command(query) {
            break;
        }

        let spinner = QuerySpinner::new(color);
        let reply = assistant.respond_tracked(query, Some(&spinner)).await;
        spinner.finish();

        print_reply(&reply);
    }

    Ok(())
}

async fn cmd_ask(config: &Config, query: &str, color: bool) -> Result<()> {
    let assistant = Assistant::from_config(config).context("Failed to build assistant")?;

    let spinner = QuerySpinner::new(color);
    let reply = assistant.respond_tracked(query, Some(&spinner)).await;
    spinner.finish();

    print_reply(&reply);

    if reply.route == Route::Rejected {
        return Err(anyhow::anyhow!(reply.answer));
    }

    Ok(())
}

fn print_reply(reply: &AssistantReply) {
    match reply.route {
        Route::NoResults => {
            println!("{}\n", format_warning(&reply.answer));
        }
        Route::SearchFailed | Route::Rejected => {
            println!("{}\n", format_error(&reply.answer));
        }
        Route::Greeting | Route::Direct | Route::Searched => {
            println!("\n{}", format_heading("Answer"));
            println!("{}", reply.answer);

            let read: Vec<_> = reply.sources.iter().filter(|s| !s.is_empty()).collect();
            if !read.is_empty() {
                println!("\n{}", format_heading("Sources"));
                for source in read {
                    println!("- {} ({})", source.title, source.link);
                }
            }
            println!("\n");
        }
    }
}

async fn cmd_search(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    Validator::validate_query(query)?;

    let mut client = DuckDuckGoClient::new(&config.http, &config.search)
        .context("Failed to create search client")?;
    if let Some(limit) = limit {
        client = client.with_max_results(limit.max(1));
    }

    match client.search(query).await {
        SearchOutcome::Results(results) => {
            println!("\nSearch Results for: \"{}\"\n", query);
            for (idx, result) in results.iter().enumerate() {
                println!("{}. {}", idx + 1, result.format_summary());
            }
            println!();
        }
        SearchOutcome::NoResults => {
            println!("{}", format_warning(&format!("No search results found for \"{}\"", query)));
        }
        SearchOutcome::Failed(reason) => {
            error!("Search failed: {}", reason);
            return Err(anyhow::anyhow!("Search failed: {}", reason));
        }
    }

    Ok(())
}

async fn cmd_extract(config: &Config, url: &str, sentences: Option<usize>) -> Result<()> {
    Validator::validate_url(url)?;

    let mut extraction = config.extraction.clone();
    if let Some(sentences) = sentences {
        extraction.max_sentences = sentences.max(1);
    }

    let extractor =
        PageExtractor::new(&config.http, &extraction).context("Failed to create page extractor")?;
    let excerpt = extractor
        .try_extract(url)
        .await
        .with_context(|| format!("Failed to extract text from {}", url))?;

    if excerpt.is_empty() {
        println!("{}", format_warning("No informative sentences found on the page"));
    } else {
        println!("{}", excerpt);
    }

    Ok(())
}

fn cmd_classify(query: &str) {
    let classifier = QueryClassifier::new();

    let message = match classifier.classification(query) {
        Classification::Greeting => format_info("Greeting: answered without search"),
        Classification::Direct => format_info("Short query: answered without search"),
        Classification::NeedsSearch(trigger) => {
            format_success(&format!("Needs web search ({:?})", trigger))
        }
    };

    println!("{}", message);
}

async fn cmd_mcp(config: &Config, transport: &str) -> Result<()> {
    info!("Starting MCP server (transport: {})", transport);

    if transport != "stdio" {
        error!("Only stdio transport is currently supported");
        return Err(anyhow::anyhow!("Unsupported transport: {}", transport));
    }

    let assistant = Assistant::from_config(config).context("Failed to build assistant")?;
    let server = AssistantMcp::new(Arc::new(assistant));

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("Failed to start MCP stdio transport")?;
    service.waiting().await?;

    Ok(())
}
