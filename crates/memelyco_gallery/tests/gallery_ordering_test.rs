//! Tests for gallery classification, address resolution and ordering.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use memelyco_core::{MediaItem, MediaKind, SortMode, StoredObject};
use memelyco_error::{MemelycoResult, StorageError, StorageErrorKind};
use memelyco_gallery::{build_gallery, resolve_items, shuffle, sort_chronological};
use memelyco_interface::{ListOptions, StorageClient, UploadOptions, UploadReceipt};
use memelyco_storage::InMemoryStorage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
}

fn item(id: &str, created_at: DateTime<Utc>) -> MediaItem {
    MediaItem::builder()
        .id(id)
        .url(format!("memory://memes/{}", id))
        .kind(MediaKind::from_file_name(id))
        .created_at(created_at)
        .build()
        .unwrap()
}

fn ids(items: &[MediaItem]) -> Vec<&str> {
    items.iter().map(|i| i.id().as_str()).collect()
}

/// Resolves every name except the ones listed as broken.
struct BrokenUrls {
    broken: Vec<&'static str>,
}

#[async_trait]
impl StorageClient for BrokenUrls {
    async fn list(&self, _options: &ListOptions) -> MemelycoResult<Vec<StoredObject>> {
        Ok(Vec::new())
    }

    fn public_url(&self, name: &str) -> MemelycoResult<String> {
        if self.broken.contains(&name) {
            return Err(StorageError::new(StorageErrorKind::NotFound(name.to_string())).into());
        }
        Ok(format!("https://cdn.example/{}", name))
    }

    async fn upload(
        &self,
        name: &str,
        _bytes: Vec<u8>,
        _options: &UploadOptions,
    ) -> MemelycoResult<UploadReceipt> {
        Ok(UploadReceipt {
            path: name.to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "broken-urls"
    }
}

#[test]
fn chronological_orders_newest_first_scenario() {
    let storage = InMemoryStorage::default();
    let raw = vec![
        StoredObject::new("a.png", Some(day(1))),
        StoredObject::new("b.mp4", Some(day(2))),
    ];
    let mut rng = StdRng::seed_from_u64(7);

    let gallery = build_gallery(raw, SortMode::Chronological, &storage, Utc::now(), &mut rng);

    assert_eq!(ids(&gallery), ["b.mp4", "a.png"]);
    assert_eq!(*gallery[0].kind(), MediaKind::Video);
    assert_eq!(*gallery[1].kind(), MediaKind::Image);
    assert_eq!(gallery[0].url(), "memory://memes/b.mp4");
}

#[test]
fn chronological_sort_is_stable_for_equal_timestamps() {
    let mut items = vec![
        item("first.png", day(1)),
        item("second.png", day(5)),
        item("third.png", day(1)),
        item("fourth.png", day(5)),
        item("fifth.png", day(1)),
    ];

    sort_chronological(&mut items);

    assert_eq!(
        ids(&items),
        ["second.png", "fourth.png", "first.png", "third.png", "fifth.png"]
    );
}

#[test]
fn missing_timestamps_count_as_fetch_time() {
    let now = day(20);
    let raw = vec![
        StoredObject::new("dated.png", Some(day(10))),
        StoredObject::new("undated.gif", None),
        StoredObject::new("also_undated.webm", None),
    ];
    let mut rng = StdRng::seed_from_u64(1);

    let gallery = build_gallery(
        raw,
        SortMode::Chronological,
        &InMemoryStorage::default(),
        now,
        &mut rng,
    );

    assert_eq!(ids(&gallery), ["undated.gif", "also_undated.webm", "dated.png"]);
    assert_eq!(*gallery[0].created_at(), now);
    assert_eq!(*gallery[1].kind(), MediaKind::Video);
}

#[test]
fn unresolvable_addresses_are_omitted() {
    let storage = BrokenUrls {
        broken: vec!["bad.png"],
    };
    let raw = vec![
        StoredObject::new("good.png", Some(day(1))),
        StoredObject::new("bad.png", Some(day(2))),
        StoredObject::new("fine.mov", Some(day(3))),
    ];

    let items = resolve_items(raw, &storage, Utc::now());

    assert_eq!(ids(&items), ["good.png", "fine.mov"]);
    assert_eq!(items[1].url(), "https://cdn.example/fine.mov");
}

#[test]
fn names_without_extension_are_images() {
    let raw = vec![StoredObject::new("no_extension", Some(day(1)))];
    let items = resolve_items(raw, &InMemoryStorage::default(), Utc::now());
    assert_eq!(*items[0].kind(), MediaKind::Image);
}

#[test]
fn random_mode_keeps_the_same_items() {
    let raw: Vec<StoredObject> = (1..=9)
        .map(|d| StoredObject::new(format!("{}.png", d), Some(day(d))))
        .collect();
    let mut rng = StdRng::seed_from_u64(42);

    let gallery = build_gallery(
        raw,
        SortMode::Random,
        &InMemoryStorage::default(),
        Utc::now(),
        &mut rng,
    );

    let mut sorted = ids(&gallery);
    sorted.sort();
    assert_eq!(
        sorted,
        ["1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png", "9.png"]
    );
}

#[test]
fn shuffle_is_uniform_over_permutations() {
    const TRIALS: usize = 60_000;
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut items = [1u8, 2, 3];
        shuffle(&mut items, &mut rng);
        *counts.entry(items).or_default() += 1;
    }

    assert_eq!(counts.len(), 6, "every permutation should appear");
    let expected = TRIALS / 6;
    for (permutation, count) in counts {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 10,
            "{:?} appeared {} times, expected about {}",
            permutation,
            count,
            expected
        );
    }
}

#[test]
fn shuffle_handles_tiny_inputs() {
    let mut rng = StdRng::seed_from_u64(3);

    let mut empty: [u8; 0] = [];
    shuffle(&mut empty, &mut rng);

    let mut single = [9u8];
    shuffle(&mut single, &mut rng);
    assert_eq!(single, [9]);
}
