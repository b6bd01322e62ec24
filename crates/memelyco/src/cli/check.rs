//! Storage connectivity check.

use memelyco::{App, MemelycoConfig, connect_storage};

/// Probe the configured bucket.
pub async fn handle_check(config: &MemelycoConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(connect_storage(&config.storage)?, config);
    let count = app.check_storage().await?;
    println!(
        "Bucket '{}' at {} is reachable ({} objects)",
        config.storage.bucket, config.storage.url, count
    );
    Ok(())
}
