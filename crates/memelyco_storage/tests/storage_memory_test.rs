//! Tests for the in-memory storage backend.

use chrono::{TimeZone, Utc};
use memelyco_core::StoredObject;
use memelyco_error::{MemelycoErrorKind, StorageErrorKind};
use memelyco_interface::{ListOptions, ListSort, StorageClient, UploadOptions};
use memelyco_storage::InMemoryStorage;

#[tokio::test]
async fn test_upload_then_list() {
    let storage = InMemoryStorage::new("memes");

    let receipt = storage
        .upload(
            "abc.png",
            b"png bytes".to_vec(),
            &UploadOptions::default().with_content_type("image/png".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(receipt.path, "abc.png");

    let listed = storage.list(&ListOptions::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "abc.png");
    assert!(listed[0].created_at.is_some());

    assert_eq!(storage.get("abc.png").await.unwrap(), b"png bytes");
    assert_eq!(
        storage.content_type("abc.png").await.as_deref(),
        Some("image/png")
    );
}

#[tokio::test]
async fn test_duplicate_name_rejected_without_overwrite() {
    let storage = InMemoryStorage::new("memes");
    storage
        .upload("dup.gif", vec![1], &UploadOptions::default())
        .await
        .unwrap();

    let err = storage
        .upload("dup.gif", vec![2], &UploadOptions::default())
        .await
        .unwrap_err();
    match err.kind() {
        MemelycoErrorKind::Storage(e) => {
            assert_eq!(e.kind, StorageErrorKind::AlreadyExists("dup.gif".to_string()))
        }
        other => panic!("unexpected error: {:?}", other),
    }

    storage
        .upload("dup.gif", vec![3], &UploadOptions::default().with_overwrite(true))
        .await
        .unwrap();
    assert_eq!(storage.get("dup.gif").await.unwrap(), vec![3]);
}

#[tokio::test]
async fn test_listing_honours_sort_hint_prefix_and_limit() {
    let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
    let storage = InMemoryStorage::with_objects(
        "memes",
        vec![
            StoredObject::new("old.png", Some(day(1))),
            StoredObject::new("new.png", Some(day(3))),
            StoredObject::new("mid.png", Some(day(2))),
            StoredObject::new("folder/inner.png", Some(day(4))),
        ],
    );

    let newest_first = storage.list(&ListOptions::default()).await.unwrap();
    let names: Vec<_> = newest_first.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["folder/inner.png", "new.png", "mid.png", "old.png"]);

    let by_name = storage
        .list(&ListOptions::default().with_sort(ListSort::NameAsc).with_limit(2))
        .await
        .unwrap();
    let names: Vec<_> = by_name.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["folder/inner.png", "mid.png"]);

    let in_folder = storage
        .list(&ListOptions::default().with_prefix("folder/".to_string()))
        .await
        .unwrap();
    assert_eq!(in_folder.len(), 1);
}

#[tokio::test]
async fn test_public_url_and_backend_name() {
    let storage = InMemoryStorage::default();
    assert_eq!(storage.public_url("x.mp4").unwrap(), "memory://memes/x.mp4");
    assert!(storage.public_url("  ").is_err());
    assert_eq!(storage.backend_name(), "memory");
    assert!(storage.is_empty().await);

    storage.insert("seeded.png", vec![], None).await;
    assert_eq!(storage.len().await, 1);
}

#[tokio::test]
async fn test_undated_objects_list_first_and_survive_the_limit() {
    let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
    let storage = InMemoryStorage::with_objects(
        "memes",
        vec![
            StoredObject::new("dated_old.png", Some(day(1))),
            StoredObject::new("undated.gif", None),
            StoredObject::new("dated_new.png", Some(day(9))),
        ],
    );

    let listed = storage
        .list(&ListOptions::default().with_limit(2))
        .await
        .unwrap();
    let names: Vec<_> = listed.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["undated.gif", "dated_new.png"]);
}
