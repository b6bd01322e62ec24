//! Building gallery items from a bucket listing.

use chrono::{DateTime, Utc};
use memelyco_core::{MediaItem, MediaKind, SortMode, StoredObject};
use memelyco_interface::StorageClient;
use rand::Rng;
use tracing::{debug, warn};

use crate::apply_sort;

/// Kind of a listed object, from its name alone.
pub fn classify(object: &StoredObject) -> MediaKind {
    MediaKind::from_file_name(&object.name)
}

/// Turn listing entries into gallery items, keeping listing order.
///
/// Entries without a timestamp get `now`, so they sort as the newest.
/// An entry whose public address cannot be resolved is left out of the
/// result and logged; the rest of the batch is unaffected.
pub fn resolve_items(
    raw: Vec<StoredObject>,
    storage: &dyn StorageClient,
    now: DateTime<Utc>,
) -> Vec<MediaItem> {
    let listed = raw.len();
    let items: Vec<MediaItem> = raw
        .into_iter()
        .filter_map(|object| {
            let url = match storage.public_url(&object.name) {
                Ok(url) => url,
                Err(e) => {
                    warn!(object = %object.name, error = %e, "Skipping object without public address");
                    return None;
                }
            };

            let item = MediaItem::builder()
                .kind(classify(&object))
                .created_at(object.created_at.unwrap_or(now))
                .url(url)
                .id(object.name)
                .build();

            match item {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(error = %e, "Skipping incomplete gallery item");
                    None
                }
            }
        })
        .collect();

    debug!(listed, resolved = items.len(), "Resolved gallery items");
    items
}

/// Build the ordered gallery from a listing.
///
/// Pure apart from the address lookups on `storage`.
pub fn build_gallery<R>(
    raw: Vec<StoredObject>,
    mode: SortMode,
    storage: &dyn StorageClient,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<MediaItem>
where
    R: Rng + ?Sized,
{
    let mut items = resolve_items(raw, storage, now);
    apply_sort(&mut items, mode, rng);
    items
}
