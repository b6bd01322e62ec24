//! Storage error types.

/// Kinds of storage errors.
///
/// Callers surface every kind to the user as a single message per operation;
/// the distinction only matters for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// The request never produced a response (DNS, TLS, connection reset)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// The provider answered with a non-success status
    #[display("Provider returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },
    /// The provider response could not be decoded
    #[display("Failed to parse provider response: {}", _0)]
    Parse(String),
    /// Invalid storage configuration (endpoint, bucket)
    #[display("Invalid configuration: {}", _0)]
    InvalidConfig(String),
    /// Object not found in the bucket
    #[display("Object not found: {}", _0)]
    NotFound(String),
    /// Object name already taken and overwriting is disabled
    #[display("Object already exists: {}", _0)]
    AlreadyExists(String),
    /// Failed to read a local file selected for upload
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use memelyco_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("cat.png".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorageErrorKind {
        &self.kind
    }
}
