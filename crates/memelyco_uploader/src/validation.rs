//! Content type validation for selected files.

use memelyco_core::{LocalFile, MediaKind};
use memelyco_error::{ValidationError, ValidationErrorKind};
use tracing::debug;

/// Accept a file whose declared content type is `image/*` or `video/*`.
///
/// The file contents are never inspected.
///
/// # Examples
///
/// ```
/// use memelyco_core::{LocalFile, MediaKind};
/// use memelyco_uploader::validate_file;
///
/// let clip = LocalFile::from_bytes("clip.mov", "video/quicktime", vec![]);
/// assert_eq!(validate_file(&clip).unwrap(), MediaKind::Video);
///
/// let notes = LocalFile::from_bytes("notes.txt", "text/plain", vec![]);
/// assert!(validate_file(&notes).is_err());
/// ```
pub fn validate_file(file: &LocalFile) -> Result<MediaKind, ValidationError> {
    MediaKind::from_content_type(&file.content_type).ok_or_else(|| {
        debug!(file = %file.name, content_type = %file.content_type, "Rejected file");
        ValidationError::new(ValidationErrorKind::UnsupportedContentType {
            file: file.name.clone(),
            content_type: file.content_type.clone(),
        })
    })
}
