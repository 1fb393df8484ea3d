use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum KeyValueError {
    #[error("storage.io_error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage.invalid_key: {0}")]
    InvalidKey(String),
}

/// String values stored under string keys, surviving restarts when the
/// backing store is durable.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError>;
}

/// Stores each key as `<dir>/<key>.json`.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(KeyValueError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        // Staged write; readers never see a partial snapshot.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).await?;
        fs::rename(&staging, &path).await?;
        Ok(())
    }
}

/// Process-local store, lost on restart.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        assert_eq!(store.get("storefront_cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_write_value_to_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("nested"));

        store.set("storefront_cart", "[]").await.unwrap();

        let on_disk = std::fs::read_to_string(dir.path().join("nested/storefront_cart.json")).unwrap();
        assert_eq!(on_disk, "[]");
        assert_eq!(store.get("storefront_cart").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn should_overwrite_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
        assert!(!dir.path().join("k.json.tmp").exists());
    }

    #[tokio::test]
    async fn should_reject_keys_that_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path());

        let result = store.set("../outside", "x").await;

        assert!(matches!(result, Err(KeyValueError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn should_keep_values_in_memory() {
        let store = MemoryKeyValueStore::new();

        store.set("a", "1").await.unwrap();

        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap(), None);
    }
}
