//! Request and response types for storage calls.

use serde::{Deserialize, Serialize};

/// Server-side ordering requested from the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListSort {
    /// Newest objects first
    #[default]
    CreatedAtDesc,
    /// Alphabetical by object name
    NameAsc,
}

impl ListSort {
    /// Column the provider sorts on.
    pub fn column(&self) -> &'static str {
        match self {
            ListSort::CreatedAtDesc => "created_at",
            ListSort::NameAsc => "name",
        }
    }

    /// Sort direction understood by the provider.
    pub fn order(&self) -> &'static str {
        match self {
            ListSort::CreatedAtDesc => "desc",
            ListSort::NameAsc => "asc",
        }
    }
}

/// Options for a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ListOptions {
    /// Folder prefix inside the bucket ("" for the root)
    pub prefix: String,
    /// Maximum number of objects returned
    pub limit: u32,
    /// Optional server-side ordering hint
    #[setters(strip_option)]
    pub sort: Option<ListSort>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            limit: 100,
            sort: Some(ListSort::CreatedAtDesc),
        }
    }
}

/// Options for storing one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct UploadOptions {
    /// `cache-control: max-age` in seconds
    pub cache_control_secs: u32,
    /// Replace an existing object with the same name
    pub overwrite: bool,
    /// Content type sent with the object
    #[setters(strip_option)]
    pub content_type: Option<String>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            cache_control_secs: 3600,
            overwrite: false,
            content_type: None,
        }
    }
}

/// What the backend reports for a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Object path inside the bucket
    pub path: String,
}
