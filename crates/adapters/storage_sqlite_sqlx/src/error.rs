//! Storage-specific error type wrapping sqlx errors.

use paybill_domain::collection::UnknownCollection;
use paybill_domain::error::PaybillError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored or seeded body is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Failed to read a seed file.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// A seed file names a collection the service does not know.
    #[error(transparent)]
    UnknownCollection(#[from] UnknownCollection),
}

impl From<StorageError> for PaybillError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
