//! Batch uploader for the Memelyco meme gallery.
//!
//! Files are validated by declared content type, staged with an optional
//! preview, and uploaded one at a time in staging order. The batch stops at
//! the first failure; files stored before it stay stored.
//!
//! # Example
//!
//! ```no_run
//! use futures_util::StreamExt;
//! use memelyco_core::LocalFile;
//! use memelyco_interface::EventBus;
//! use memelyco_storage::InMemoryStorage;
//! use memelyco_uploader::Uploader;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut uploader = Uploader::new(Arc::new(InMemoryStorage::default()), EventBus::default());
//! uploader.stage_file(LocalFile::from_bytes("cat.png", "image/png", vec![1, 2, 3])).unwrap();
//!
//! let mut outcomes = std::pin::pin!(uploader.upload_all());
//! while let Some(outcome) = outcomes.next().await {
//!     println!("{}", outcome);
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod naming;
mod preview;
mod uploader;
mod validation;

pub use naming::generate_object_name;
pub use preview::{load_bytes, render_preview};
pub use uploader::{
    INVALID_SELECTION_MESSAGE, StagingReport, UPLOAD_ERROR_MESSAGE, UPLOAD_SUCCESS_MESSAGE,
    UploadOutcome, UploadReport, Uploader, UploaderStatus,
};
pub use validation::validate_file;
