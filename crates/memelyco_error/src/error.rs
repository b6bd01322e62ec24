//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, StorageError, ValidationError};

/// Every failure a Memelyco operation can end with.
///
/// # Examples
///
/// ```
/// use memelyco_error::{MemelycoError, StorageError, StorageErrorKind};
///
/// let storage_err = StorageError::new(StorageErrorKind::Transport("connection refused".into()));
/// let err: MemelycoError = storage_err.into();
/// assert!(format!("{}", err).contains("Storage Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MemelycoErrorKind {
    /// Listing or upload failure reported by the storage backend
    #[from(StorageError)]
    Storage(StorageError),
    /// A selected file was rejected before staging
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Memelyco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use memelyco_error::{ConfigError, MemelycoResult};
///
/// fn might_fail() -> MemelycoResult<()> {
///     Err(ConfigError::new("storage.bucket must not be empty"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(!err.is_storage());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Memelyco Error: {}", _0)]
pub struct MemelycoError(Box<MemelycoErrorKind>);

impl MemelycoError {
    /// Create a new error from a kind.
    pub fn new(kind: MemelycoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MemelycoErrorKind {
        &self.0
    }

    /// Whether this error came from the storage backend.
    pub fn is_storage(&self) -> bool {
        matches!(self.kind(), MemelycoErrorKind::Storage(_))
    }

    /// Whether this error is a rejected file selection.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), MemelycoErrorKind::Validation(_))
    }
}

impl<T> From<T> for MemelycoError
where
    T: Into<MemelycoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Memelyco operations.
pub type MemelycoResult<T> = std::result::Result<T, MemelycoError>;
