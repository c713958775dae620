//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spacetraveling blog client
#[derive(Parser, Debug)]
#[command(name = "spacetraveling")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Site configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CMS API endpoint (overrides config and PRISMIC_API_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the connection and print the master ref
    Check,

    /// List posts, loading more pages on request
    Posts {
        /// Number of extra pages to load after the first
        #[arg(long, default_value = "0")]
        pages: u32,

        /// Load every page
        #[arg(long, conflicts_with = "pages")]
        all: bool,
    },

    /// Show a post with its reading time and neighbors
    Post {
        /// Post uid (slug)
        uid: String,
    },

    /// List every post uid
    Paths,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
