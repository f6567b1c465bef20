use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// String key-value store holding serialized blobs, shaped like browser
/// local storage.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    async fn remove_item(&self, key: &str) -> StorageResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryLocalStorage {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStorage for MemoryLocalStorage {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let inner = self.inner.read().await;
        Ok(inner.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut inner = self.inner.write().await;
        inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        let mut inner = self.inner.write().await;
        inner.remove(key);
        Ok(())
    }
}

/// Keeps each key in its own `<key>.json` file under `directory`.
#[derive(Debug, Clone)]
pub struct FileLocalStorage {
    directory: PathBuf,
}

impl FileLocalStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.json")))
    }
}

#[async_trait]
impl LocalStorage for FileLocalStorage {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp = self.directory.join(format!(".{key}.json.tmp"));
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(write_err)?;
        tokio::fs::write(&tmp, value).await.map_err(write_err)?;
        // The rename is what makes the new value visible, all at once.
        tokio::fs::rename(&tmp, &path).await.map_err(write_err)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                key: key.to_string(),
                source,
            }),
        }
    }
}
