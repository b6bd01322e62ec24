//! Batch upload command.

use futures_util::StreamExt;
use memelyco::{App, LocalFile, MemelycoConfig, UploadOutcome, connect_storage};
use std::path::PathBuf;

/// Stage the given files and upload them in order.
pub async fn handle_upload(
    config: &MemelycoConfig,
    files: Vec<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(connect_storage(&config.storage)?, config);
    app.nav().request_upload();
    app.pump_events().await;

    let report = app
        .uploader_mut()
        .stage_files(files.iter().map(LocalFile::from_path));
    for rejected in &report.rejected {
        eprintln!("Skipping {}: {}", rejected.file_name(), app.uploader().status());
    }
    if report.staged == 0 {
        return Err("no valid image or video selected".into());
    }

    let mut failed = false;
    {
        let mut outcomes = std::pin::pin!(app.uploader_mut().upload_all());
        while let Some(outcome) = outcomes.next().await {
            match &outcome {
                UploadOutcome::Uploaded { .. } => println!("{}", outcome),
                UploadOutcome::Failed { .. } => {
                    eprintln!("{}", outcome);
                    failed = true;
                }
            }
        }
    }

    println!("{}", app.uploader().status());
    if failed {
        return Err(app.uploader().status().to_string().into());
    }

    app.pump_events().await;
    println!("Gallery now shows {} memes", app.gallery().items().len());
    Ok(())
}
