//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Curio: catalogue curation analysis and optimization
#[derive(Parser)]
#[command(name = "curio")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a catalogue dataset and report gaps, balance, and score
    Analyze {
        /// Path to the dataset file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the full analysis as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Produce curation recommendations for automated application
    Curate {
        /// Path to the dataset file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Skip gap-filling recommendations
        #[arg(long)]
        no_fill_gaps: bool,

        /// Skip distribution-balancing (reorder) recommendations
        #[arg(long)]
        no_balance: bool,

        /// Cap the catalogue at this many items
        #[arg(long)]
        max_artworks: Option<usize>,

        /// Print the recommendations as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}
