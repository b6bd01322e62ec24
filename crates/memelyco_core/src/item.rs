//! Listed objects and gallery items.

use crate::MediaKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One object as reported by the storage listing.
///
/// # Examples
///
/// ```
/// use memelyco_core::StoredObject;
///
/// let undated = StoredObject::new("cat.png", None);
/// assert!(undated.created_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredObject {
    /// Unique object name inside the bucket
    pub name: String,
    /// Creation timestamp, when the provider reports one
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredObject {
    /// Create a listing entry.
    pub fn new(name: impl Into<String>, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            created_at,
        }
    }
}

/// A meme ready to be shown in the gallery.
///
/// Built fresh on every gallery load and never modified afterwards.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use memelyco_core::{MediaItem, MediaKind};
///
/// let item = MediaItem::builder()
///     .id("b.mp4")
///     .url("https://cdn.example/memes/b.mp4")
///     .kind(MediaKind::Video)
///     .created_at(Utc::now())
///     .build()
///     .unwrap();
///
/// assert_eq!(item.id(), "b.mp4");
/// assert_eq!(*item.kind(), MediaKind::Video);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct MediaItem {
    /// Object name, unique within the bucket
    id: String,
    /// Publicly reachable address of the object
    url: String,
    /// Image or video, from the name's extension
    kind: MediaKind,
    /// Creation time; "now at fetch time" when the listing had none
    created_at: DateTime<Utc>,
}

impl MediaItem {
    /// Creates a new media item builder.
    pub fn builder() -> MediaItemBuilder {
        MediaItemBuilder::default()
    }
}
