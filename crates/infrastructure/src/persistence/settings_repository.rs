//! Client settings persistence.
//!
//! Settings live in `settings.json` under the data directory, which defaults
//! to the platform config directory:
//! - Linux: ~/.config/courier/settings.json
//! - macOS: ~/Library/Application Support/courier/settings.json
//! - Windows: %APPDATA%/courier/settings.json

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use courier_domain::ClientSettings;
use tokio::fs;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "COURIER_DATA_DIR";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Returns the platform default data directory, `<config_dir>/courier`.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("courier"))
}

/// Resolves the data directory: an explicit path wins, then
/// `COURIER_DATA_DIR`, then the platform default.
///
/// # Errors
/// Returns `NoConfigDir` if nothing is set and the platform has no config
/// directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, SettingsError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_data_dir().ok_or(SettingsError::NoConfigDir)
}

/// Repository for client settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    data_dir: PathBuf,
}

impl SettingsRepository {
    /// Creates a repository reading from `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the path to the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist. Fields missing
    /// from the file take their defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        match fs::read(self.settings_path()).await {
            Ok(content) => Ok(from_json_bytes(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ClientSettings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.data_dir).await?;

        let content = to_json_stable(settings)?;
        fs::write(self.settings_path(), content).await?;

        Ok(())
    }
}
