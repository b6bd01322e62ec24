//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use memelyco::SortMode;
use std::path::PathBuf;

/// Memelyco - browse and upload memes in a hosted storage bucket
#[derive(Parser, Debug)]
#[command(name = "memelyco")]
#[command(about = "Browse and upload memes in a hosted storage bucket", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the gallery
    List {
        /// Ordering: chronological (newest first) or random
        #[arg(long)]
        sort: Option<SortMode>,

        /// Maximum number of objects to list
        #[arg(long)]
        limit: Option<u32>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Upload images and videos, one at a time
    Upload {
        /// Files to upload, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check that the storage bucket is reachable
    Check,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
