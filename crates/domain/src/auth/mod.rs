//! Authentication domain types

mod types;

pub use types::{ApiKeyLocation, AuthConfig, deserialize_nullable};
