//! Validation errors for files selected for upload.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The declared content type is neither `image/*` nor `video/*`
    #[display("'{}' has unsupported content type '{}'", file, content_type)]
    UnsupportedContentType {
        /// Name of the rejected file
        file: String,
        /// Declared content type (empty when none was declared)
        content_type: String,
    },
}

/// Validation error with location tracking.
///
/// Never fatal: the offending file is simply left out of the pending uploads.
///
/// # Examples
///
/// ```
/// use memelyco_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::UnsupportedContentType {
///     file: "notes.txt".to_string(),
///     content_type: "text/plain".to_string(),
/// });
/// assert!(format!("{}", err).contains("notes.txt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Name of the file that failed validation.
    pub fn file_name(&self) -> &str {
        match &self.kind {
            ValidationErrorKind::UnsupportedContentType { file, .. } => file,
        }
    }
}
