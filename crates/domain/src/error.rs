//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A raw body sub-kind is not recognised.
    #[error("unsupported raw body type: {0}")]
    UnsupportedRawKind(String),

    /// A `key=value` or `key:value` pair could not be split.
    #[error("invalid pair: {0}")]
    InvalidPair(String),

    /// A referenced collection does not exist.
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// A referenced environment does not exist.
    #[error("environment not found: {0}")]
    EnvironmentNotFound(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
