use std::path::PathBuf;
use thiserror::Error;

use crate::todo::TodoId;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("todo not found")]
    NotFound(TodoId),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no todo ids left to assign")]
    IdExhausted,

    #[error("storage lock poisoned")]
    LockPoisoned,
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a lookup miss rather than a backend failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
