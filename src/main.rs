use std::sync::Arc;

use clap::{Parser, Subcommand};
use kazlaw::api::create_router;
use kazlaw::assistant::LegalAssistant;
use kazlaw::client::{AskClient, DEFAULT_SERVER_URL};
use kazlaw::config::Config;

#[derive(Parser)]
#[command(about = "Answers questions about Kazakhstan law from live web sources")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve POST /ask (default)
    Serve {
        /// Overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Send one question to a running server and print the answer
    Ask {
        query: String,
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (also picks up log crate records)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => serve(bind).await,
        Command::Ask { query, server } => {
            let answer = AskClient::new(&server).ask(&query).await?;
            println!("{answer}");
            Ok(())
        }
    }
}

async fn serve(bind: Option<String>) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let addr = bind.unwrap_or_else(|| config.bind_addr.clone());

    let assistant = Arc::new(LegalAssistant::new(&config));
    let app = create_router(assistant);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
