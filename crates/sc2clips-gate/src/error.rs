//! Error types for the cooldown store.

use std::path::PathBuf;

/// Failure to persist the cooldown records.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Store file or its parent directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The records could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
