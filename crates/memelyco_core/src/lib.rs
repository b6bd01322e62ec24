//! Core data types for the Memelyco meme gallery.
//!
//! This crate provides the data model shared by the gallery and uploader
//! components: media classification, listed objects, gallery items, staged
//! uploads and the in-process notifications exchanged between components.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod item;
mod media;
mod sort;
mod upload;

pub use event::AppEvent;
pub use item::{MediaItem, MediaItemBuilder, MediaItemBuilderError, StoredObject};
pub use media::{MediaKind, VIDEO_EXTENSIONS, file_extension, guess_content_type};
pub use sort::SortMode;
pub use upload::{FileSource, LocalFile, PendingUpload, UploadProgress};
