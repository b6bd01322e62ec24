//! Tests for validation, staging, naming and previews.

use memelyco_core::{LocalFile, MediaKind};
use memelyco_error::ValidationErrorKind;
use memelyco_interface::EventBus;
use memelyco_storage::InMemoryStorage;
use memelyco_uploader::{
    INVALID_SELECTION_MESSAGE, Uploader, UploaderStatus, generate_object_name, render_preview,
    validate_file,
};
use std::sync::Arc;

fn uploader() -> Uploader {
    Uploader::new(Arc::new(InMemoryStorage::default()), EventBus::default())
}

#[test]
fn drop_with_one_invalid_file_stages_the_rest() {
    let mut uploader = uploader();

    let report = uploader.stage_files(vec![
        LocalFile::from_bytes("a.png", "image/png", vec![]),
        LocalFile::from_bytes("notes.txt", "text/plain", vec![]),
        LocalFile::from_bytes("b.webm", "video/webm", vec![]),
    ]);

    assert_eq!(report.staged, 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].file_name(), "notes.txt");
    assert_eq!(uploader.pending().len(), 2);
    assert_eq!(*uploader.pending()[1].kind(), MediaKind::Video);
    assert_eq!(
        *uploader.status(),
        UploaderStatus::Failed(INVALID_SELECTION_MESSAGE.to_string())
    );
}

#[test]
fn staging_a_valid_file_clears_the_previous_message() {
    let mut uploader = uploader();
    assert!(
        uploader
            .stage_file(LocalFile::from_bytes("doc.pdf", "application/pdf", vec![]))
            .is_err()
    );

    uploader
        .stage_file(LocalFile::from_bytes("ok.jpg", "image/jpeg", vec![]))
        .unwrap();

    assert_eq!(*uploader.status(), UploaderStatus::Idle);
}

#[test]
fn validation_uses_declared_type_only() {
    let disguised = LocalFile::from_bytes("movie.mp4", "application/octet-stream", vec![]);
    let err = validate_file(&disguised).unwrap_err();
    assert_eq!(
        *err.kind(),
        ValidationErrorKind::UnsupportedContentType {
            file: "movie.mp4".to_string(),
            content_type: "application/octet-stream".to_string(),
        }
    );

    let renamed = LocalFile::from_bytes("meme.txt", "image/gif", vec![]);
    assert_eq!(validate_file(&renamed).unwrap(), MediaKind::Image);
}

#[test]
fn remove_and_clear_staged_files() {
    let mut uploader = uploader();
    uploader.stage_files(vec![
        LocalFile::from_bytes("a.png", "image/png", vec![]),
        LocalFile::from_bytes("b.png", "image/png", vec![]),
        LocalFile::from_bytes("c.png", "image/png", vec![]),
    ]);

    let removed = uploader.remove_staged(1).unwrap();
    assert_eq!(removed.file().name, "b.png");
    assert!(uploader.remove_staged(5).is_none());

    let names: Vec<&str> = uploader
        .pending()
        .iter()
        .map(|p| p.file().name.as_str())
        .collect();
    assert_eq!(names, ["a.png", "c.png"]);

    uploader.clear();
    assert!(uploader.pending().is_empty());
}

#[test]
fn object_names_keep_only_the_extension() {
    let name = generate_object_name("My Funny Cat.JPEG");
    let (token, extension) = name.rsplit_once('.').unwrap();
    assert_eq!(extension, "jpeg");
    assert_eq!(token.len(), 32);
    assert!(!name.contains("Funny"));

    let bare = generate_object_name("README");
    assert!(!bare.contains('.'));
    assert_ne!(bare, generate_object_name("README"));
}

#[tokio::test]
async fn previews_render_as_data_urls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    let mut uploader = uploader();
    uploader.stage_files(vec![
        LocalFile::from_path(&path),
        LocalFile::from_path(dir.path().join("gone.png")),
    ]);
    assert!(uploader.pending().iter().all(|p| p.preview_pending()));

    let rendered = uploader.render_previews().await;

    assert_eq!(rendered, 1);
    assert_eq!(
        uploader.pending()[0].preview().as_deref(),
        Some("data:image/gif;base64,R0lGODlh")
    );
    assert!(uploader.pending()[1].preview_pending());
}

#[tokio::test]
async fn preview_of_in_memory_bytes() {
    let file = LocalFile::from_bytes("clip.mp4", "video/mp4", vec![0, 1, 2]);
    let preview = render_preview(&file).await.unwrap();
    assert_eq!(preview, "data:video/mp4;base64,AAEC");
}
