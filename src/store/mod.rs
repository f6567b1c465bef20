mod local;

pub use local::*;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::contact::Contact;
use crate::error::StorageResult;

/// Persistence for the whole contact list.
///
/// `load` never fails: a missing, unreadable or corrupt value reads as an
/// empty list. `save` replaces the stored list in one step.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn load(&self) -> Vec<Contact>;
    async fn save(&self, contacts: &[Contact]) -> StorageResult<()>;
}

/// Stores the list as a single JSON array under one key of a [`LocalStorage`].
#[derive(Debug, Clone)]
pub struct BlobContactStore<S> {
    storage: S,
    key: String,
}

impl<S: LocalStorage> BlobContactStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[async_trait]
impl<S: LocalStorage> ContactStore for BlobContactStore<S> {
    async fn load(&self) -> Vec<Contact> {
        let data = match self.storage.get_item(&self.key).await {
            Ok(Some(data)) => data,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read contacts: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Contact>>(&data) {
            Ok(contacts) => {
                debug!("Loaded {} contacts", contacts.len());
                contacts
            }
            Err(e) => {
                warn!("Failed to parse contacts, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    async fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        let data = serde_json::to_string(contacts)?;
        self.storage.set_item(&self.key, &data).await?;
        debug!("Saved {} contacts", contacts.len());
        Ok(())
    }
}
