//! Hosted object storage backends for Memelyco.
//!
//! Both backends implement [`StorageClient`]:
//!
//! - [`SupabaseStorage`] talks to the Supabase Storage REST API of a project
//!   (list, upload) and derives public object addresses locally.
//! - [`InMemoryStorage`] keeps objects in a map; used for local development
//!   and tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use memelyco_interface::{ListOptions, StorageClient};
//! use memelyco_storage::{StorageConfig, SupabaseStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = SupabaseStorage::new(StorageConfig::new(
//!     "https://project.supabase.co",
//!     "anon-key",
//! ))?;
//!
//! for object in storage.list(&ListOptions::default()).await? {
//!     println!("{} -> {}", object.name, storage.public_url(&object.name)?);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod memory;
mod supabase;

pub use config::{DEFAULT_BUCKET, StorageConfig};
pub use memelyco_error::{StorageError, StorageErrorKind};
pub use memelyco_interface::StorageClient;
pub use memory::InMemoryStorage;
pub use supabase::SupabaseStorage;
