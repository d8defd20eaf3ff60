// src/main.rs
// expert-desk - ask an AI expert persona from the browser or the terminal

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use expert_desk::config::{AppConfig, EnvCredentials};
use expert_desk::invoker::CompletionInvoker;
use expert_desk::llm::{LlmClient, OpenAiChatClient};
use expert_desk::persona::Persona;
use expert_desk::web::{self, AppState};

#[derive(Parser)]
#[command(name = "expert-desk")]
#[command(about = "Ask an AI expert persona through a single-page web form")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web form (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// Expert to consult, e.g. "programming expert" or "programming"
        #[arg(short, long, default_value = "medical expert")]
        expert: String,

        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// List the available experts
    Experts,
}

fn init_tracing(config: &AppConfig, debug: bool) -> Result<()> {
    let level = if debug { Level::DEBUG } else { config.tracing_level() };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_client(config: &AppConfig) -> Arc<dyn LlmClient> {
    Arc::new(OpenAiChatClient::new(config, Arc::new(EnvCredentials::default())))
}

async fn run_server(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Model: {} (temperature {})", config.model, config.temperature);

    let state = AppState::new(build_client(&config))?;
    let app = web::create_router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Expert desk listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_ask(config: &AppConfig, expert: &str, question: &[String]) -> Result<()> {
    let question = question.join(" ");
    if question.trim().is_empty() {
        bail!("Please enter a question.");
    }

    let invoker = CompletionInvoker::new(build_client(config));
    println!("{}", invoker.respond(&question, expert).await);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_tracing(&config, cli.debug)?;

    match cli.command {
        None => run_server(config, None, None).await,
        Some(Commands::Serve { host, port }) => run_server(config, host, port).await,
        Some(Commands::Ask { expert, question }) => run_ask(&config, &expert, &question).await,
        Some(Commands::Experts) => {
            for persona in Persona::all() {
                println!("{:<12} {}", persona.id(), persona.label());
            }
            Ok(())
        }
    }
}
