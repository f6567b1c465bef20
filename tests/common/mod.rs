#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use family_dialer::app::{
    Collaborators, Dialer, DialerSettings, Event, EventReceiver, FormEdit, Notice,
};
use family_dialer::contact::Contact;
use family_dialer::error::{IntegrationError, IntegrationResult, StorageError, StorageResult};
use family_dialer::integration::{
    ClipboardWriter, Confirmer, DeepLink, ExternalLauncher, MemoryClipboard,
};
use family_dialer::store::{BlobContactStore, ContactStore, LocalStorage, MemoryLocalStorage};

#[derive(Default)]
pub struct RecordingLauncher {
    launched: RwLock<Vec<DeepLink>>,
}

impl RecordingLauncher {
    pub async fn launched(&self) -> Vec<DeepLink> {
        self.launched.read().await.clone()
    }
}

#[async_trait]
impl ExternalLauncher for RecordingLauncher {
    async fn launch(&self, link: &DeepLink) -> IntegrationResult<()> {
        self.launched.write().await.push(link.clone());
        Ok(())
    }
}

pub struct FailingClipboard;

#[async_trait]
impl ClipboardWriter for FailingClipboard {
    async fn write_text(&self, _text: &str) -> IntegrationResult<()> {
        Err(IntegrationError::Clipboard("permission denied".to_string()))
    }
}

/// Reads like the wrapped storage but refuses every write.
#[derive(Clone)]
pub struct ReadOnlyStorage {
    inner: MemoryLocalStorage,
}

impl ReadOnlyStorage {
    pub fn new(inner: MemoryLocalStorage) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LocalStorage for ReadOnlyStorage {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Write {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    async fn remove_item(&self, key: &str) -> StorageResult<()> {
        Err(StorageError::Write {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

pub struct ScriptedConfirmer {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

pub struct Harness {
    pub dialer: Dialer,
    pub events: EventReceiver,
    pub storage: MemoryLocalStorage,
    pub clipboard: MemoryClipboard,
    pub launcher: Arc<RecordingLauncher>,
    pub confirmer: Arc<ScriptedConfirmer>,
}

impl Harness {
    pub async fn start(storage: MemoryLocalStorage, confirm: bool) -> Self {
        Self::start_with_clipboard(storage, confirm, None).await
    }

    pub async fn start_with_clipboard(
        storage: MemoryLocalStorage,
        confirm: bool,
        clipboard_override: Option<Arc<dyn ClipboardWriter>>,
    ) -> Self {
        let store = Arc::new(BlobContactStore::new(storage.clone()));
        Self::build(storage, store, confirm, clipboard_override).await
    }

    /// Starts over `storage` but with every save failing.
    pub async fn start_read_only(storage: MemoryLocalStorage, confirm: bool) -> Self {
        let store = Arc::new(BlobContactStore::new(ReadOnlyStorage::new(storage.clone())));
        Self::build(storage, store, confirm, None).await
    }

    async fn build(
        storage: MemoryLocalStorage,
        store: Arc<dyn ContactStore>,
        confirm: bool,
        clipboard_override: Option<Arc<dyn ClipboardWriter>>,
    ) -> Self {
        let clipboard = MemoryClipboard::new();
        let launcher = Arc::new(RecordingLauncher::default());
        let confirmer = Arc::new(ScriptedConfirmer::new(confirm));
        let collaborators = Collaborators {
            store,
            clipboard: clipboard_override
                .unwrap_or_else(|| Arc::new(clipboard.clone()) as Arc<dyn ClipboardWriter>),
            launcher: launcher.clone(),
            confirmer: confirmer.clone(),
        };
        let (dialer, events) = Dialer::start(collaborators, DialerSettings::default()).await;
        Self {
            dialer,
            events,
            storage,
            clipboard,
            launcher,
            confirmer,
        }
    }

    pub async fn send(&mut self, event: Event) -> Option<Notice> {
        self.dialer.handle(event).await
    }

    /// Waits for the next event the dialer posted to itself and handles it.
    pub async fn pump(&mut self) -> Option<Notice> {
        let event = self.events.recv().await.expect("event channel open");
        self.dialer.handle(event).await
    }

    pub async fn add(
        &mut self,
        name: &str,
        wechat_name: &str,
        phone_number: &str,
    ) -> Option<Notice> {
        self.send(Event::AddContact).await;
        self.send(Event::EditForm(FormEdit::Name(name.to_string()))).await;
        self.send(Event::EditForm(FormEdit::WechatName(wechat_name.to_string()))).await;
        self.send(Event::EditForm(FormEdit::PhoneNumber(phone_number.to_string()))).await;
        self.send(Event::SaveForm).await
    }

    pub async fn persisted(&self) -> Vec<Contact> {
        BlobContactStore::new(self.storage.clone()).load().await
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.dialer.state().contacts().to_vec()
    }
}
