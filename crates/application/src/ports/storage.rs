//! Key-value storage port
//!
//! The client persists each of its collections, environments and history as
//! one independent serialized blob under a fixed key.

use async_trait::async_trait;

/// Key holding the serialized collections.
pub const COLLECTIONS_KEY: &str = "collections";
/// Key holding the serialized environments.
pub const ENVIRONMENTS_KEY: &str = "environments";
/// Key holding the serialized request history.
pub const HISTORY_KEY: &str = "requestHistory";

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be used by this store.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The store refused the write (e.g., quota exceeded).
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Durable key-value store with whole-value reads and writes.
///
/// There are no transactions across keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
