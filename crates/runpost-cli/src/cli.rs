//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// runpost - Turn fitness app posts into structured activity records
#[derive(Debug, Parser)]
#[command(name = "runpost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "RUNPOST_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// JSON file holding an array of {text, created_at} posts ("-" for stdin)
    #[arg(long, short, env = "RUNPOST_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Write logs to stderr as JSON lines (for batch runs)
    #[arg(long, global = true)]
    pub log_json: bool,

    /// App brand name (overrides the config file)
    #[arg(long, global = true)]
    pub brand: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Category counts, percentages and date range (default)
    Summary,

    /// Activity ranking and distance by weekday
    Activities {
        /// Number of leading activities in the distance series
        #[arg(long)]
        top: Option<usize>,

        /// Show mean distance per weekday instead of every point
        #[arg(long)]
        mean: bool,
    },

    /// Search commentary of posts with written content
    Search {
        /// Text to look for (case-insensitive)
        query: String,

        /// Print matches as HTML table rows
        #[arg(long)]
        html: bool,
    },

    /// Show the derived fields of each post
    Classify {
        /// Maximum number of posts to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print HTML table rows for posts with written content
    Render {
        /// Render every post, not only those with written content
        #[arg(long)]
        all: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
