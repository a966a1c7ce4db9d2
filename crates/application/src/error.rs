//! Application error types

use thiserror::Error;
use courier_domain::DomainError;

use crate::ports::StoreError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Stored data could not be decoded, or state could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
