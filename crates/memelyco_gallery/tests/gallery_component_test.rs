//! Tests for the gallery component state machine.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use memelyco_core::{AppEvent, SortMode, StoredObject};
use memelyco_error::{MemelycoResult, StorageError, StorageErrorKind};
use memelyco_gallery::{Gallery, GalleryState, LOAD_ERROR_MESSAGE};
use memelyco_interface::{ListOptions, StorageClient, UploadOptions, UploadReceipt};
use memelyco_storage::InMemoryStorage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory bucket that counts listings and can be switched to failing.
struct CountingStorage {
    inner: InMemoryStorage,
    list_calls: AtomicUsize,
    fail_list: AtomicBool,
}

impl CountingStorage {
    fn new(inner: InMemoryStorage) -> Self {
        Self {
            inner,
            list_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl StorageClient for CountingStorage {
    async fn list(&self, options: &ListOptions) -> MemelycoResult<Vec<StoredObject>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::Api {
                status: 400,
                message: "Bucket not found".to_string(),
            })
            .into());
        }
        self.inner.list(options).await
    }

    fn public_url(&self, name: &str) -> MemelycoResult<String> {
        self.inner.public_url(name)
    }

    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> MemelycoResult<UploadReceipt> {
        self.inner.upload(name, bytes, options).await
    }

    fn backend_name(&self) -> &'static str {
        "counting"
    }
}

fn seeded_bucket() -> InMemoryStorage {
    let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
    InMemoryStorage::with_objects(
        "memes",
        vec![
            StoredObject::new("a.png", Some(day(1))),
            StoredObject::new("b.mp4", Some(day(2))),
            StoredObject::new("c.gif", Some(day(3))),
        ],
    )
}

#[tokio::test]
async fn starts_loading_then_becomes_ready() {
    let storage = Arc::new(CountingStorage::new(seeded_bucket()));
    let mut gallery = Gallery::new(storage.clone());
    assert_eq!(gallery.state(), GalleryState::Loading);

    let count = gallery.load().await.unwrap();

    assert_eq!(count, 3);
    let ids: Vec<String> = gallery.items().iter().map(|i| i.id().clone()).collect();
    assert_eq!(ids, ["c.gif", "b.mp4", "a.png"]);
}

#[tokio::test]
async fn listing_failure_shows_single_error_and_empty_gallery() {
    let storage = Arc::new(CountingStorage::new(seeded_bucket()));
    let mut gallery = Gallery::new(storage.clone());
    gallery.load().await.unwrap();

    storage.fail_list.store(true, Ordering::SeqCst);
    let result = gallery.load().await;

    assert!(result.unwrap_err().is_storage());
    assert_eq!(
        gallery.state(),
        GalleryState::Failed(LOAD_ERROR_MESSAGE.to_string())
    );
    assert!(gallery.items().is_empty());
    assert_eq!(storage.list_calls.load(Ordering::SeqCst), 2, "no automatic retry");
}

#[tokio::test]
async fn completed_upload_triggers_full_reload() {
    let inner = seeded_bucket();
    let storage = Arc::new(CountingStorage::new(inner.clone()));
    let mut gallery = Gallery::new(storage.clone());
    gallery.load().await.unwrap();

    inner.insert("d.webm", vec![], None).await;
    let reloaded = gallery
        .handle_event(&AppEvent::MemeUploaded {
            paths: vec!["d.webm".to_string()],
        })
        .await
        .unwrap();

    assert!(reloaded);
    assert_eq!(storage.list_calls.load(Ordering::SeqCst), 2);
    assert_eq!(gallery.items().len(), 4);
    assert_eq!(gallery.items()[0].id(), "d.webm");

    let ignored = gallery
        .handle_event(&AppEvent::ShowUploadDialog)
        .await
        .unwrap();
    assert!(!ignored);
    assert_eq!(storage.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn switching_sort_mode_reorders_without_refetching() {
    let storage = Arc::new(CountingStorage::new(seeded_bucket()));
    let mut gallery = Gallery::with_rng(storage.clone(), StdRng::seed_from_u64(11));
    gallery.load().await.unwrap();

    gallery.set_sort_mode(SortMode::Random);
    let mut shuffled: Vec<String> = gallery.items().iter().map(|i| i.id().clone()).collect();
    shuffled.sort();
    assert_eq!(shuffled, ["a.png", "b.mp4", "c.gif"]);

    gallery.set_sort_mode(SortMode::Chronological);
    let ids: Vec<String> = gallery.items().iter().map(|i| i.id().clone()).collect();
    assert_eq!(ids, ["c.gif", "b.mp4", "a.png"]);

    assert_eq!(storage.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn observers_are_notified_of_changes() {
    let storage = Arc::new(CountingStorage::new(seeded_bucket()));
    let mut gallery = Gallery::new(storage);
    let mut watcher = gallery.watch();

    gallery.load().await.unwrap();

    assert!(watcher.has_changed().unwrap());
    let state = watcher.borrow_and_update().clone();
    assert_eq!(state.items().len(), 3);
}

#[tokio::test]
async fn sort_mode_before_first_load_only_sets_the_mode() {
    let storage = Arc::new(CountingStorage::new(seeded_bucket()));
    let mut gallery = Gallery::new(storage).with_sort_mode(SortMode::Random);
    assert_eq!(gallery.sort_mode(), SortMode::Random);

    gallery.reshuffle();
    assert_eq!(gallery.state(), GalleryState::Loading);
}

#[tokio::test]
async fn reshuffle_draws_a_new_order_of_the_same_items_without_refetching() {
    let objects = (0..8)
        .map(|i| StoredObject::new(format!("{}.png", i), None))
        .collect();
    let bucket = InMemoryStorage::with_objects("memes", objects);
    let storage = Arc::new(CountingStorage::new(bucket));
    let mut gallery = Gallery::with_rng(storage.clone(), StdRng::seed_from_u64(5))
        .with_sort_mode(SortMode::Random);
    gallery.load().await.unwrap();

    let ids = |gallery: &Gallery| -> Vec<String> {
        gallery.items().iter().map(|item| item.id().clone()).collect()
    };
    let before = ids(&gallery);

    // A fresh permutation may repeat the old one; a few draws cannot all do so.
    let after = (0..5)
        .map(|_| {
            gallery.reshuffle();
            ids(&gallery)
        })
        .find(|order| *order != before)
        .expect("reshuffling never changed the order");

    let mut sorted_before = before.clone();
    let mut sorted_after = after.clone();
    sorted_before.sort();
    sorted_after.sort();
    assert_eq!(sorted_before, sorted_after);
    assert_eq!(sorted_after.len(), 8);
    assert_eq!(storage.list_calls.load(Ordering::SeqCst), 1);
}
