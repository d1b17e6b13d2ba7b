//! Curio CLI - catalogue curation analysis.

mod cli;
mod commands;
mod dataset;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "curio=debug" } else { "curio=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Analyze { file, output, json } => {
            commands::analyze::run(file, output, json).await
        }

        Commands::Curate {
            file,
            no_fill_gaps,
            no_balance,
            max_artworks,
            json,
        } => commands::curate::run(file, no_fill_gaps, no_balance, max_artworks, json).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
