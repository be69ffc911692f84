//! Error types for inventory store operations.

use std::path::PathBuf;

use inventory_core::ValidationError;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing id is not an error; see [`Outcome`](inventory_core::Outcome).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("cannot open database '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement against an open database failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Quantity or price was negative.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Returns `true` for failures of the underlying database, as opposed
    /// to rejected input.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Storage(_))
    }
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
