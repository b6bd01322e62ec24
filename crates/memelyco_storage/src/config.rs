//! Connection settings for the hosted object store.

use serde::{Deserialize, Serialize};

/// Bucket holding the memes unless configured otherwise.
pub const DEFAULT_BUCKET: &str = "memes";

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Endpoint, access key and bucket of the storage project.
///
/// `Debug` output never includes the key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Project endpoint address (e.g., `https://project.supabase.co`)
    pub url: String,
    /// Access key sent with every request
    pub key: String,
    /// Bucket name
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StorageConfig {
    /// Settings for the default bucket.
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            bucket: default_bucket(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Use another bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
