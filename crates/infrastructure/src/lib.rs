//! Courier Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod http;
pub mod persistence;
pub mod serialization;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use http::{BuiltBody, build_body};
pub use persistence::{
    DATA_DIR_ENV, FileKeyValueStore, MemoryKeyValueStore, SettingsError, SettingsRepository,
    default_data_dir, resolve_data_dir,
};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable};
