//! In-memory storage backend.
//!
//! Objects live in a map guarded by an `RwLock`; everything is lost when the
//! last clone is dropped. Public addresses use the `memory://` scheme.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use memelyco_core::StoredObject;
use memelyco_error::{MemelycoResult, StorageError, StorageErrorKind};
use memelyco_interface::{ListOptions, ListSort, StorageClient, UploadOptions, UploadReceipt};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// An object held in memory.
#[derive(Debug, Clone)]
struct MemoryObject {
    bytes: Vec<u8>,
    content_type: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

/// In-memory bucket.
///
/// # Example
///
/// ```
/// use memelyco_interface::{ListOptions, StorageClient, UploadOptions};
/// use memelyco_storage::InMemoryStorage;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let storage = InMemoryStorage::new("memes");
/// storage
///     .upload("cat.png", vec![1, 2, 3], &UploadOptions::default())
///     .await
///     .unwrap();
///
/// let listed = storage.list(&ListOptions::default()).await.unwrap();
/// assert_eq!(listed[0].name, "cat.png");
/// assert_eq!(storage.public_url("cat.png").unwrap(), "memory://memes/cat.png");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    bucket: String,
    objects: Arc<RwLock<HashMap<String, MemoryObject>>>,
}

impl InMemoryStorage {
    /// Create an empty bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a bucket pre-filled with listing entries (empty contents).
    pub fn with_objects(bucket: impl Into<String>, objects: Vec<StoredObject>) -> Self {
        let map = objects
            .into_iter()
            .map(|object| {
                (
                    object.name,
                    MemoryObject {
                        bytes: Vec::new(),
                        content_type: None,
                        created_at: object.created_at,
                    },
                )
            })
            .collect();

        Self {
            bucket: bucket.into(),
            objects: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace an object with an explicit timestamp.
    pub async fn insert(
        &self,
        name: impl Into<String>,
        bytes: Vec<u8>,
        created_at: Option<DateTime<Utc>>,
    ) {
        self.objects.write().await.insert(
            name.into(),
            MemoryObject {
                bytes,
                content_type: None,
                created_at,
            },
        );
    }

    /// Contents of an object, if present.
    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(name)
            .map(|object| object.bytes.clone())
    }

    /// Content type an object was stored with.
    pub async fn content_type(&self, name: &str) -> Option<String> {
        self.objects
            .read()
            .await
            .get(name)
            .and_then(|object| object.content_type.clone())
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Whether the bucket is empty.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BUCKET)
    }
}

#[async_trait]
impl StorageClient for InMemoryStorage {
    #[instrument(skip(self, options), fields(bucket = %self.bucket))]
    async fn list(&self, options: &ListOptions) -> MemelycoResult<Vec<StoredObject>> {
        let objects = self.objects.read().await;
        let mut listed: Vec<StoredObject> = objects
            .iter()
            .filter(|(name, _)| name.starts_with(&options.prefix))
            .map(|(name, object)| StoredObject::new(name.clone(), object.created_at))
            .collect();

        // Map iteration order is arbitrary; fall back to name order so that
        // listings are reproducible.
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        // Undated objects count as the newest, before the limit applies.
        if let Some(ListSort::CreatedAtDesc) = options.sort {
            listed.sort_by_key(|object| {
                Reverse(object.created_at.unwrap_or(DateTime::<Utc>::MAX_UTC))
            });
        }
        listed.truncate(options.limit as usize);

        debug!(count = listed.len(), "Listed in-memory bucket");
        Ok(listed)
    }

    fn public_url(&self, name: &str) -> MemelycoResult<String> {
        if name.trim().is_empty() {
            return Err(StorageError::new(StorageErrorKind::NotFound(
                "empty object name".to_string(),
            ))
            .into());
        }
        Ok(format!("memory://{}/{}", self.bucket, name))
    }

    #[instrument(skip(self, bytes, options), fields(bucket = %self.bucket, size = bytes.len()))]
    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> MemelycoResult<UploadReceipt> {
        let mut objects = self.objects.write().await;
        if objects.contains_key(name) && !options.overwrite {
            return Err(StorageError::new(StorageErrorKind::AlreadyExists(name.to_string())).into());
        }

        objects.insert(
            name.to_string(),
            MemoryObject {
                bytes,
                content_type: options.content_type.clone(),
                created_at: Some(Utc::now()),
            },
        );

        debug!(object = name, "Stored in-memory object");
        Ok(UploadReceipt {
            path: name.to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
