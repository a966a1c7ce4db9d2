//! Durable storage for client state and settings.

mod file_store;
mod memory_store;
mod settings_repository;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use settings_repository::{
    DATA_DIR_ENV, SettingsError, SettingsRepository, default_data_dir, resolve_data_dir,
};
