//! Error types for the persistence layer.

use thiserror::Error;

use medibase_model::EntityKind;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No record with the requested identity exists for this kind.
    #[error("{kind} not found")]
    NotFound {
        /// The kind that was looked up.
        kind: EntityKind,
    },

    /// A record could not be converted to or from its JSON representation.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A creation shape could not be encoded as a BSON document.
    #[cfg(feature = "mongodb")]
    #[error("document encoding failure: {0}")]
    Encoding(#[from] mongodb::bson::ser::Error),

    /// The underlying store failed or is unreachable.
    ///
    /// There is no local recovery for these: the failure propagates to the
    /// caller of the request that triggered it.
    #[cfg(feature = "mongodb")]
    #[error("storage backend failure: {0}")]
    Backend(#[from] mongodb::error::Error),
}

impl StorageError {
    /// Shorthand for a kind-specific not-found error.
    pub fn not_found(kind: EntityKind) -> Self {
        StorageError::NotFound { kind }
    }

    /// Returns true if this error is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
