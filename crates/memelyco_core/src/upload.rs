//! Local files, staged uploads and upload progress.

use crate::{MediaKind, guess_content_type};
use std::path::{Path, PathBuf};

/// Content type declared for files whose extension is not recognised.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Where the bytes of a local file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// File on disk, read lazily
    Path(PathBuf),
    /// Bytes already in memory
    Bytes(Vec<u8>),
}

/// A file selected or dropped by the user.
///
/// # Examples
///
/// ```
/// use memelyco_core::LocalFile;
///
/// let file = LocalFile::from_path("/tmp/funny.webm");
/// assert_eq!(file.name, "funny.webm");
/// assert_eq!(file.content_type, "video/webm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    /// Original file name, including extension
    pub name: String,
    /// Declared content type
    pub content_type: String,
    /// Where to read the bytes from
    pub source: FileSource,
}

impl LocalFile {
    /// Describe a file on disk, declaring its content type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let content_type = guess_content_type(&name)
            .unwrap_or(UNKNOWN_CONTENT_TYPE)
            .to_string();

        Self {
            name,
            content_type,
            source: FileSource::Path(path.to_path_buf()),
        }
    }

    /// Describe an in-memory file with an explicitly declared content type.
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            source: FileSource::Bytes(bytes.into()),
        }
    }
}

/// A validated file waiting for the user to confirm the upload.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PendingUpload {
    /// The selected file
    file: LocalFile,
    /// Kind from the declared content type
    kind: MediaKind,
    /// Data URL preview, once rendered
    preview: Option<String>,
}

impl PendingUpload {
    /// Stage a file whose kind has already been validated.
    pub fn new(file: LocalFile, kind: MediaKind) -> Self {
        Self {
            file,
            kind,
            preview: None,
        }
    }

    /// Attach a rendered preview.
    pub fn set_preview(&mut self, preview: impl Into<String>) {
        self.preview = Some(preview.into());
    }

    /// Whether the preview is still being prepared.
    pub fn preview_pending(&self) -> bool {
        self.preview.is_none()
    }
}

/// Files stored so far out of the batch size.
///
/// # Examples
///
/// ```
/// use memelyco_core::UploadProgress;
///
/// let progress = UploadProgress::new(1, 3);
/// assert_eq!(progress.to_string(), "1/3");
/// assert!(!progress.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}/{}", uploaded, total)]
pub struct UploadProgress {
    /// Files stored so far
    pub uploaded: usize,
    /// Files in the batch
    pub total: usize,
}

impl UploadProgress {
    /// Create a progress snapshot.
    pub fn new(uploaded: usize, total: usize) -> Self {
        Self { uploaded, total }
    }

    /// Whether every file of the batch is stored.
    pub fn is_complete(&self) -> bool {
        self.uploaded == self.total
    }
}
