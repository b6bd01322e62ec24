//! Gallery listing command.

use super::OutputFormat;
use memelyco::{App, JsonError, MemelycoConfig, MemelycoError, SortMode, connect_storage};

/// Load the gallery and print it.
pub async fn handle_list(
    config: &MemelycoConfig,
    sort: Option<SortMode>,
    limit: Option<u32>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config.clone();
    if let Some(sort) = sort {
        config.gallery.default_sort = sort;
    }
    if let Some(limit) = limit {
        config.gallery.list_limit = limit;
    }
    config.validate()?;

    let mut app = App::new(connect_storage(&config.storage)?, &config);
    if let Err(e) = app.start().await {
        eprintln!("{}", app.gallery().state());
        return Err(e.into());
    }

    let items = app.gallery().items();
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&items)
                .map_err(|e| MemelycoError::from(JsonError::from(e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if items.is_empty() {
                println!("No memes yet.");
                return Ok(());
            }
            println!("{} memes ({})", items.len(), app.gallery().sort_mode());
            for item in &items {
                println!(
                    "{:<5}  {}  {}",
                    item.kind(),
                    item.created_at().format("%Y-%m-%d %H:%M"),
                    item.url()
                );
            }
        }
    }

    Ok(())
}
