//! Reading local files and rendering data URL previews.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use memelyco_core::{FileSource, LocalFile};
use memelyco_error::{MemelycoResult, StorageError, StorageErrorKind};
use tracing::{error, instrument};

/// Read the bytes behind a file source.
///
/// # Errors
///
/// Returns a `FileRead` storage error when a path cannot be read.
#[instrument(skip(source))]
pub async fn load_bytes(source: &FileSource) -> MemelycoResult<Vec<u8>> {
    match source {
        FileSource::Bytes(bytes) => Ok(bytes.clone()),
        FileSource::Path(path) => tokio::fs::read(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to read file");
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()
        }),
    }
}

/// Render a file as a `data:` URL using its declared content type.
pub async fn render_preview(file: &LocalFile) -> MemelycoResult<String> {
    let bytes = load_bytes(&file.source).await?;
    Ok(format!(
        "data:{};base64,{}",
        file.content_type,
        STANDARD.encode(bytes)
    ))
}
