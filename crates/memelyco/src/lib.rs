//! Memelyco - meme gallery and batch uploader
//!
//! Memelyco browses and uploads meme images and videos kept in a hosted object
//! store (a Supabase Storage bucket). It is organised as a workspace with
//! focused crates:
//!
//! - `memelyco_core` - Data model (media kinds, gallery items, staged uploads)
//! - `memelyco_interface` - `StorageClient` trait and in-process event bus
//! - `memelyco_error` - Error types
//! - `memelyco_storage` - Supabase and in-memory storage backends
//! - `memelyco_gallery` - Listing, classification and ordering
//! - `memelyco_uploader` - Validation, previews and sequential uploads
//!
//! This crate wires them into an [`App`], loads [`MemelycoConfig`], sets up
//! logging, and re-exports everything for convenience.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use memelyco::{App, MemelycoConfig, connect_storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MemelycoConfig::load()?;
//!     let mut app = App::new(connect_storage(&config.storage)?, &config);
//!
//!     app.start().await?;
//!     for item in app.gallery().items() {
//!         println!("{} {}", item.kind(), item.url());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - Export tracing spans through OpenTelemetry (stdout)

mod app;
mod config;
pub mod observability;

pub use app::{App, MEMORY_ENDPOINT, NavBar, connect_storage};
pub use config::{
    BUCKET_ENV, GalleryConfig, KEY_ENV, MemelycoConfig, URL_ENV, UploaderConfig,
};

// Re-export component crates
pub use memelyco_core::*;
pub use memelyco_error::*;
pub use memelyco_gallery::*;
pub use memelyco_interface::*;
pub use memelyco_storage::{DEFAULT_BUCKET, InMemoryStorage, StorageConfig, SupabaseStorage};
pub use memelyco_uploader::*;
