//! File-backed key-value store.
//!
//! Each key is one file in the data directory:
//! ```text
//! data_dir/
//!   collections.json
//!   environments.json
//!   requestHistory.json
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use courier_application::ports::{KeyValueStore, StoreError};
use tokio::fs;

/// Key-value store that keeps one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `root`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory holding the files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file backing `key`.
    ///
    /// # Errors
    /// Returns `InvalidKey` for keys that are empty or could escape the
    /// directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;

        // Write then rename so a crash never leaves a half-written blob.
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert_eq!(store.get("collections").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("nested"));

        store.set("requestHistory", "[]").await.unwrap();
        store.set("requestHistory", r#"[{"id":"1"}]"#).await.unwrap();

        assert_eq!(
            store.get("requestHistory").await.unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
        assert!(dir.path().join("nested/requestHistory.json").is_file());
        assert!(!dir.path().join("nested/.requestHistory.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        for key in ["", "../escape", "a/b", "x.json"] {
            let result = store.set(key, "{}").await;
            assert!(matches!(result, Err(StoreError::InvalidKey(_))), "key {key:?}");
        }
    }
}
