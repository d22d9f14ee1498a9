//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PaybillError`] via `#[from]`. Status-code mapping happens in the HTTP
//! adapter only.

use crate::id::ParseIdError;

/// Top-level error returned by every application operation.
#[derive(Debug, thiserror::Error)]
pub enum PaybillError {
    /// The requested document does not exist, or nothing was changed.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The request is missing something the operation needs.
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),

    /// A path identifier could not be parsed as a storage identifier.
    #[error(transparent)]
    InvalidId(#[from] ParseIdError),

    /// The storage backend failed.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Not-found outcomes, each carrying the fixed message clients receive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// No bill (in `all-bills` or `total-bills`) has the given id.
    #[error("Bill not found")]
    Bill { id: String },

    /// The payment update matched nothing or modified nothing.
    #[error("No payment found to update")]
    PaymentToUpdate { id: String },

    /// The payment delete removed nothing.
    #[error("No payment found to delete")]
    PaymentToDelete { id: String },
}

/// Client errors detected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BadRequestError {
    /// `GET /payments` was called without an `email` query parameter.
    #[error("Email is required")]
    MissingEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_fixed_not_found_messages() {
        let bill = PaybillError::from(NotFoundError::Bill { id: "x".into() });
        assert_eq!(bill.to_string(), "Bill not found");

        let update = PaybillError::from(NotFoundError::PaymentToUpdate { id: "x".into() });
        assert_eq!(update.to_string(), "No payment found to update");

        let delete = PaybillError::from(NotFoundError::PaymentToDelete { id: "x".into() });
        assert_eq!(delete.to_string(), "No payment found to delete");
    }

    #[test]
    fn should_render_missing_email_message() {
        let err = PaybillError::from(BadRequestError::MissingEmail);
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn should_expose_storage_source_message() {
        let io = std::io::Error::other("connection refused");
        let err = PaybillError::Storage(Box::new(io));
        assert_eq!(err.to_string(), "connection refused");
    }
}
