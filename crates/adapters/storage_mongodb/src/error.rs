//! Storage-specific error type wrapping driver errors.

use mongodb::bson;

use paybill_domain::error::PaybillError;

/// Errors originating from the `MongoDB` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The driver failed: connection, selection, command or write error.
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),

    /// A request body could not be converted to BSON.
    #[error("{0}")]
    Bson(#[from] bson::ser::Error),

    /// A stored document's `_id` is not an object id.
    #[error("unsupported document id: {0}")]
    UnsupportedId(bson::Bson),
}

impl From<StorageError> for PaybillError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
