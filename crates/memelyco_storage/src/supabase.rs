//! Supabase Storage REST backend.

use crate::StorageConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use memelyco_core::StoredObject;
use memelyco_error::{MemelycoResult, StorageError, StorageErrorKind};
use memelyco_interface::{ListOptions, StorageClient, UploadOptions, UploadReceipt};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Marker object the provider creates to keep empty folders alive.
const EMPTY_FOLDER_PLACEHOLDER: &str = ".emptyFolderPlaceholder";

/// Body of a listing request.
#[derive(Debug, Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: u32,
    offset: u32,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    sort_by: Option<SortBy>,
}

#[derive(Debug, Serialize)]
struct SortBy {
    column: &'static str,
    order: &'static str,
}

/// One entry of a listing response.
///
/// Folders come back with a `null` id.
#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Response of a successful upload.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "Key")]
    key: Option<String>,
}

/// Client for one bucket of a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseStorage {
    client: Client,
    base: Url,
    key: String,
    bucket: String,
}

impl SupabaseStorage {
    /// Creates a client for the configured project and bucket.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfig` storage error if the endpoint is not an
    /// absolute http(s) address, the bucket is empty, or the HTTP client
    /// cannot be built.
    #[instrument(skip(config), fields(url = %config.url, bucket = %config.bucket))]
    pub fn new(config: StorageConfig) -> MemelycoResult<Self> {
        let base = Url::parse(&config.url).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidConfig(format!(
                "storage endpoint '{}': {}",
                config.url, e
            )))
        })?;

        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(StorageError::new(StorageErrorKind::InvalidConfig(format!(
                "storage endpoint '{}' must be an http(s) address",
                config.url
            )))
            .into());
        }

        if config.bucket.trim().is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidConfig(
                "bucket name must not be empty".to_string(),
            ))
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                StorageError::new(StorageErrorKind::InvalidConfig(format!(
                    "HTTP client: {}",
                    e
                )))
            })?;

        debug!("Created Supabase storage client");
        Ok(Self {
            client,
            base,
            key: config.key,
            bucket: config.bucket,
        })
    }

    /// Bucket this client reads and writes.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// `{base}/storage/v1/object/{route...}/{bucket}/{name segments...}`
    fn object_url(&self, route: &[&str], name: Option<&str>) -> MemelycoResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                StorageError::new(StorageErrorKind::InvalidConfig(format!(
                    "storage endpoint '{}' cannot hold a path",
                    self.base
                )))
            })?;
            segments
                .pop_if_empty()
                .extend(["storage", "v1", "object"])
                .extend(route)
                .push(&self.bucket);
            if let Some(name) = name {
                segments.extend(name.split('/').filter(|s| !s.is_empty()));
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Map a non-success response to a storage error.
    async fn api_error(response: reqwest::Response, object: &str) -> StorageError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, object, "Storage provider returned error");

        if status == StatusCode::CONFLICT || body.contains("Duplicate") {
            return StorageError::new(StorageErrorKind::AlreadyExists(object.to_string()));
        }
        if status == StatusCode::NOT_FOUND {
            return StorageError::new(StorageErrorKind::NotFound(object.to_string()));
        }

        StorageError::new(StorageErrorKind::Api {
            status: status.as_u16(),
            message: body,
        })
    }
}

#[async_trait]
impl StorageClient for SupabaseStorage {
    #[instrument(skip(self, options), fields(bucket = %self.bucket, limit = options.limit))]
    async fn list(&self, options: &ListOptions) -> MemelycoResult<Vec<StoredObject>> {
        let url = self.object_url(&["list"], None)?;
        let body = ListRequest {
            prefix: &options.prefix,
            limit: options.limit,
            offset: 0,
            sort_by: options.sort.map(|sort| SortBy {
                column: sort.column(),
                order: sort.order(),
            }),
        };

        debug!(url = %url, "Listing bucket");
        let response = self
            .authorized(self.client.post(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send listing request");
                StorageError::new(StorageErrorKind::Transport(e.to_string()))
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, &self.bucket).await.into());
        }

        let entries: Vec<ListEntry> = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse listing response");
            StorageError::new(StorageErrorKind::Parse(e.to_string()))
        })?;

        let objects: Vec<StoredObject> = entries
            .into_iter()
            .filter(|entry| entry.id.is_some() && entry.name != EMPTY_FOLDER_PLACEHOLDER)
            .map(|entry| StoredObject::new(entry.name, entry.created_at))
            .collect();

        info!(count = objects.len(), "Listed bucket");
        Ok(objects)
    }

    fn public_url(&self, name: &str) -> MemelycoResult<String> {
        if name.trim().is_empty() {
            return Err(StorageError::new(StorageErrorKind::NotFound(
                "empty object name".to_string(),
            ))
            .into());
        }
        Ok(self.object_url(&["public"], Some(name))?.to_string())
    }

    #[instrument(skip(self, bytes, options), fields(bucket = %self.bucket, size = bytes.len()))]
    async fn upload(
        &self,
        name: &str,
        bytes: Vec<u8>,
        options: &UploadOptions,
    ) -> MemelycoResult<UploadReceipt> {
        let url = self.object_url(&[], Some(name))?;
        let content_type = options
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());

        debug!(url = %url, content_type = %content_type, "Uploading object");
        let response = self
            .authorized(self.client.post(url))
            .header("content-type", content_type)
            .header(
                "cache-control",
                format!("max-age={}", options.cache_control_secs),
            )
            .header("x-upsert", options.overwrite.to_string())
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, object = name, "Failed to send upload request");
                StorageError::new(StorageErrorKind::Transport(e.to_string()))
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response, name).await.into());
        }

        // The provider answers with "{bucket}/{name}"; the receipt carries the
        // path inside the bucket.
        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse upload response");
            StorageError::new(StorageErrorKind::Parse(e.to_string()))
        })?;
        let prefix = format!("{}/", self.bucket);
        let path = uploaded
            .key
            .as_deref()
            .map(|key| key.strip_prefix(&prefix).unwrap_or(key).to_string())
            .unwrap_or_else(|| name.to_string());

        info!(object = %path, "Uploaded object");
        Ok(UploadReceipt { path })
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}
