//! Error types.
//!
//! Only construction-time mistakes and storage failures are errors.
//! Validation problems are returned as data (see `wizard::validation`).

use thiserror::Error;

/// Invalid query configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("range minimum {min} exceeds maximum {max}")]
    InvertedRange { min: f64, max: f64 },
}

/// Failure of a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage quota exceeded: {needed} bytes requested, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Failure while writing or removing a draft.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("autosave worker failed to start: {0}")]
    Worker(#[source] std::io::Error),
}
