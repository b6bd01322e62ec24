//! Error types for Memelyco.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - constructors use `#[track_caller]` for automatic location capture
//!
//! [`MemelycoError`] boxes any of them, so `?` works across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use memelyco_error::{MemelycoResult, StorageError, StorageErrorKind};
//!
//! fn list_bucket() -> MemelycoResult<Vec<String>> {
//!     Err(StorageError::new(StorageErrorKind::Api {
//!         status: 404,
//!         message: "Bucket not found".to_string(),
//!     }))?
//! }
//!
//! assert!(list_bucket().unwrap_err().is_storage());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{MemelycoError, MemelycoErrorKind, MemelycoResult};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
