//! Gallery list builder for Memelyco.
//!
//! Turns a bucket listing into an ordered sequence of [`MediaItem`]s:
//!
//! 1. classify every object as image or video by its extension,
//! 2. resolve its public address through the [`StorageClient`],
//! 3. order the result newest-first or as a uniform random permutation.
//!
//! [`Gallery`] wraps the builder with loading/error state, observers, and a
//! full rebuild whenever an upload batch completes.
//!
//! [`MediaItem`]: memelyco_core::MediaItem
//! [`StorageClient`]: memelyco_interface::StorageClient

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod gallery;
mod ordering;

pub use builder::{build_gallery, classify, resolve_items};
pub use gallery::{Gallery, GalleryState, LOAD_ERROR_MESSAGE};
pub use ordering::{apply_sort, shuffle, sort_chronological};
