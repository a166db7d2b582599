use std::time::Duration;

/// Errors surfaced by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matches the requested id (including ids below 1).
    #[error("record not found")]
    RecordNotFound,

    /// The stored version no longer matches the one the caller supplied.
    #[error("edit conflict")]
    EditConflict,

    /// Anything else: connectivity, constraint violations, deadlines.
    #[error("store operation failed: {0}")]
    Failure(#[source] StoreFailure),
}

/// Underlying cause of a [`StoreError::Failure`].
#[derive(Debug, thiserror::Error)]
pub enum StoreFailure {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("operation exceeded its {0:?} deadline")]
    Timeout(Duration),
}

impl StoreError {
    /// `true` when the failure was caused by the operation deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, StoreError::Failure(StoreFailure::Timeout(_)))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Failure(StoreFailure::Database(err))
    }
}
