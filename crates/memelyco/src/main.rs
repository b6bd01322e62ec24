//! Memelyco CLI binary.
//!
//! This binary provides command-line access to the gallery and uploader:
//! - List the gallery newest-first or shuffled
//! - Upload images and videos in order with progress
//! - Check that the storage bucket is set up

use clap::Parser;
use memelyco::MemelycoConfig;
use memelyco::observability::{ObservabilityConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_check, handle_list, handle_upload};

    // Pick up SUPABASE_* from a local .env file
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability(
        ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = match &cli.config {
        Some(path) => MemelycoConfig::from_file(path)?,
        None => MemelycoConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::List {
            sort,
            limit,
            format,
        } => {
            handle_list(&config, sort, limit, format).await?;
        }

        Commands::Upload { files } => {
            handle_upload(&config, files).await?;
        }

        Commands::Check => {
            handle_check(&config).await?;
        }
    }

    Ok(())
}
