mod api;
mod cli;
mod delivery;
mod ingest;
mod models;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prizmbet")]
#[command(about = "Spreadsheet-backed sports odds feed for the PrizmBet static site")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the feed API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Fetch the spreadsheet and write the feed document to disk
    Ingest {
        #[arg(short, long, default_value = "matches.json")]
        output: String,
    },
    /// Run the tiered cache/static/live load once and print the matches
    Load,
    /// Force-refresh from the primary source, falling back to a full load
    Refresh,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port }) => {
            tracing::info!("Starting PrizmBet feed server on port {}", port);
            api::serve(port).await?;
        }
        Some(Commands::Ingest { output }) => {
            tracing::info!("Running ingestion to {}", output);
            cli::ingest_to_file(&output).await?;
        }
        Some(Commands::Load) => {
            cli::load_feed().await?;
        }
        Some(Commands::Refresh) => {
            cli::refresh_feed().await?;
        }
        None => {
            // Default to serving
            tracing::info!("Starting PrizmBet feed server on port 3000");
            api::serve(3000).await?;
        }
    }

    Ok(())
}
