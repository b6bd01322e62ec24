//! Trait definition for storage backends.

use crate::{ListOptions, UploadOptions, UploadReceipt};
use async_trait::async_trait;
use memelyco_core::StoredObject;
use memelyco_error::MemelycoResult;

/// Object storage the gallery reads from and the uploader writes to.
///
/// Timeouts, authentication and transport concerns belong to the
/// implementation; callers never retry.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// List the objects of the bucket.
    ///
    /// # Errors
    ///
    /// Returns a storage error on transport, authentication or provider failure.
    async fn list(&self, options: &ListOptions) -> MemelycoResult<Vec<StoredObject>>;

    /// Public address of an object.
    ///
    /// Computed locally, no request is made.
    fn public_url(&self, name: &str) -> MemelycoResult<String>;

    /// Store `bytes` under `name`.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the provider rejects the object, including
    /// a name collision while `options.overwrite` is false.
    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> MemelycoResult<UploadReceipt>;

    /// Backend name for logs (e.g., "supabase", "memory").
    fn backend_name(&self) -> &'static str;
}
