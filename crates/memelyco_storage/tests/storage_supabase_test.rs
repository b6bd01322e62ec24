//! Tests for the Supabase backend that need no network access.

use memelyco_error::{MemelycoErrorKind, StorageErrorKind};
use memelyco_interface::{ListOptions, StorageClient, UploadOptions};
use memelyco_storage::{StorageConfig, SupabaseStorage};

fn storage_kind(err: &memelyco_error::MemelycoError) -> StorageErrorKind {
    match err.kind() {
        MemelycoErrorKind::Storage(e) => e.kind.clone(),
        other => panic!("expected storage error, got {:?}", other),
    }
}

#[test]
fn test_public_url_layout() {
    let storage =
        SupabaseStorage::new(StorageConfig::new("https://demo.supabase.co", "anon")).unwrap();

    assert_eq!(storage.bucket(), "memes");
    assert_eq!(
        storage.public_url("a1b2.png").unwrap(),
        "https://demo.supabase.co/storage/v1/object/public/memes/a1b2.png"
    );
    assert_eq!(storage.backend_name(), "supabase");
}

#[test]
fn test_public_url_encodes_names_and_keeps_folders() {
    let storage = SupabaseStorage::new(
        StorageConfig::new("https://demo.supabase.co/", "anon").with_bucket("funny"),
    )
    .unwrap();

    assert_eq!(
        storage.public_url("2024/my meme.gif").unwrap(),
        "https://demo.supabase.co/storage/v1/object/public/funny/2024/my%20meme.gif"
    );
    assert!(storage.public_url("").is_err());
}

#[test]
fn test_rejects_invalid_endpoint() {
    let err = SupabaseStorage::new(StorageConfig::new("not a url", "anon")).unwrap_err();
    assert!(matches!(
        storage_kind(&err),
        StorageErrorKind::InvalidConfig(_)
    ));

    let err = SupabaseStorage::new(StorageConfig::new("ftp://files.example", "anon")).unwrap_err();
    assert!(matches!(
        storage_kind(&err),
        StorageErrorKind::InvalidConfig(_)
    ));
}

#[test]
fn test_rejects_empty_bucket() {
    let err = SupabaseStorage::new(
        StorageConfig::new("https://demo.supabase.co", "anon").with_bucket("  "),
    )
    .unwrap_err();
    assert!(matches!(
        storage_kind(&err),
        StorageErrorKind::InvalidConfig(_)
    ));
}

#[test]
fn test_debug_redacts_key() {
    let config = StorageConfig::new("https://demo.supabase.co", "super-secret");
    let debug = format!("{:?}", config);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let mut config = StorageConfig::new("http://127.0.0.1:9", "anon");
    config.timeout_secs = 2;
    let storage = SupabaseStorage::new(config).unwrap();

    let err = storage.list(&ListOptions::default()).await.unwrap_err();
    assert!(matches!(storage_kind(&err), StorageErrorKind::Transport(_)));

    let err = storage
        .upload("x.png", vec![0], &UploadOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(storage_kind(&err), StorageErrorKind::Transport(_)));
}
