//! Courier Domain - Core business types
//!
//! This crate defines the domain model for the Courier API client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod collection;
pub mod environment;
pub mod error;
pub mod history;
pub mod id;
pub mod request;
pub mod response;
pub mod settings;
pub mod state;

pub use auth::{ApiKeyLocation, AuthConfig};
pub use collection::{Collection, Folder};
pub use environment::{Environment, EnvironmentVariable};
pub use error::{DomainError, DomainResult};
pub use history::{HISTORY_LIMIT, HistoryEntry, RequestHistory};
pub use id::generate_id;
pub use request::{FormField, HttpMethod, KeyValue, RawKind, RequestBody, RequestSpec};
pub use response::{BodyView, ResponseSpec, StatusCategory, render_body};
pub use settings::ClientSettings;
pub use state::{AppState, RequestPatch};
