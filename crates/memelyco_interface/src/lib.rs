//! Trait definitions for the Memelyco meme gallery.
//!
//! This crate defines the narrow seam to the hosted object store
//! ([`StorageClient`]) and the in-process [`EventBus`] the components use to
//! notify each other.

mod events;
mod traits;
mod types;

pub use events::{DEFAULT_EVENT_CAPACITY, EventBus, EventSubscription};
pub use traits::StorageClient;
pub use types::{ListOptions, ListSort, UploadOptions, UploadReceipt};
