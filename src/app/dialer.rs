use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::avatar::AvatarReader;
use super::dialog::{CallDialog, CallType, DialogStep};
use super::event::{Event, EventReceiver, EventSender, Notice};
use super::form::ContactForm;
use super::state::{AppState, View};
use crate::config::{Config, DEFAULT_WECHAT_URI};
use crate::contact::Contact;
use crate::error::{AvatarResult, DialerError, Result};
use crate::integration::{ClipboardWriter, Confirmer, DeepLink, ExternalLauncher};
use crate::store::ContactStore;
use crate::util::ContactId;

pub const DELETE_PROMPT: &str = "确定要删除这位联系人吗？";

/// The services the dialer talks to. A host fills these in with real
/// adapters; tests use in-memory ones.
#[derive(Clone)]
pub struct Collaborators {
    pub store: Arc<dyn ContactStore>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub launcher: Arc<dyn ExternalLauncher>,
    pub confirmer: Arc<dyn Confirmer>,
}

#[derive(Debug, Clone)]
pub struct DialerSettings {
    pub wechat_uri: String,
    pub avatar_max_bytes: u64,
}

impl Default for DialerSettings {
    fn default() -> Self {
        Self {
            wechat_uri: DEFAULT_WECHAT_URI.to_string(),
            avatar_max_bytes: AvatarReader::default().max_bytes(),
        }
    }
}

impl From<&Config> for DialerSettings {
    fn from(config: &Config) -> Self {
        Self {
            wechat_uri: config.integrations.wechat_uri.clone(),
            avatar_max_bytes: config.avatar.max_bytes,
        }
    }
}

/// Owns the contact list and the screen state. Every change goes through
/// [`Dialer::handle`], one event at a time.
pub struct Dialer {
    state: AppState,
    collaborators: Collaborators,
    avatars: AvatarReader,
    wechat_uri: String,
    events: EventSender,
    next_session: u64,
}

impl Dialer {
    /// Loads the stored contacts and returns the dialer together with the
    /// receiving end of its event channel.
    pub async fn start(
        collaborators: Collaborators,
        settings: DialerSettings,
    ) -> (Self, EventReceiver) {
        let contacts = collaborators.store.load().await;
        info!("Loaded {} contacts", contacts.len());

        let (events, rx) = mpsc::unbounded_channel();
        let dialer = Self {
            state: AppState::new(contacts),
            collaborators,
            avatars: AvatarReader::new(settings.avatar_max_bytes),
            wechat_uri: settings.wechat_uri,
            events,
            next_session: 0,
        };
        (dialer, rx)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sender(&self) -> EventSender {
        self.events.clone()
    }

    pub async fn handle(&mut self, event: Event) -> Option<Notice> {
        debug!("Handling event: {:?}", event);
        let result = match event {
            Event::StartCall(call_type) => self.start_call(call_type).await,
            Event::DialPhone => self.dial_phone().await,
            Event::LaunchWechat => self.launch_wechat().await,
            Event::AvatarLoaded { session, result } => self.avatar_loaded(session, result),
            Event::SaveForm => self.save_form().await,
            Event::DeleteContact => self.delete_contact().await,
            other => {
                self.navigate(other);
                Ok(())
            }
        };
        report(result)
    }

    fn navigate(&mut self, event: Event) {
        match event {
            Event::AddContact => self.open_add_form(),
            Event::OpenContact(id) => self.open_dialog(&id),
            Event::CloseDialog => self.close_dialog(),
            Event::GuideBack => self.guide_back(),
            Event::EditContact => self.open_edit_form(),
            Event::EditForm(edit) => match self.state.form.as_mut() {
                Some(form) => form.apply(edit),
                None => debug!("Ignoring form edit, no form is open"),
            },
            Event::PickAvatar(path) => self.pick_avatar(path),
            Event::CancelForm => self.cancel_form(),
            other => debug!("Unhandled event: {:?}", other),
        }
    }

    fn next_session(&mut self) -> u64 {
        self.next_session += 1;
        self.next_session
    }

    fn open_add_form(&mut self) {
        if self.state.view != View::Home || self.state.dialog.is_some() {
            debug!("Ignoring add, view is {:?}", self.state.view);
            return;
        }
        let session = self.next_session();
        self.state.form = Some(ContactForm::new(session));
        self.state.view = View::Add;
    }

    fn open_dialog(&mut self, id: &ContactId) {
        if self.state.view != View::Home {
            debug!("Ignoring open contact, view is {:?}", self.state.view);
            return;
        }
        let Some(contact) = self.state.find(id).cloned() else {
            warn!("No contact with id {}", id);
            return;
        };
        self.state.dialog = Some(CallDialog::new(contact));
    }

    fn close_dialog(&mut self) {
        match self.state.dialog.as_ref().map(CallDialog::can_close) {
            Some(true) => self.state.dialog = None,
            Some(false) => debug!("Dialog can only be closed from the selection step"),
            None => {}
        }
    }

    fn guide_back(&mut self) {
        if let Some(dialog) = self.state.dialog.as_mut() {
            dialog.back();
        }
    }

    async fn start_call(&mut self, call_type: CallType) -> Result<()> {
        let Some(dialog) = self.state.dialog.as_mut() else {
            debug!("Ignoring call start, no dialog is open");
            return Ok(());
        };

        dialog.start_call(call_type);
        let wechat_name = dialog.contact().wechat_name.clone();

        // Lets the user paste the name into WeChat search if the jump fails.
        self.collaborators.clipboard.write_text(&wechat_name).await?;
        if let Some(dialog) = self.state.dialog.as_mut() {
            dialog.mark_copied();
        }
        Ok(())
    }

    async fn dial_phone(&mut self) -> Result<()> {
        let Some(dialog) = &self.state.dialog else {
            return Ok(());
        };
        if dialog.step() != DialogStep::Select {
            debug!("Phone dial is only offered on the selection step");
            return Ok(());
        }

        let contact = dialog.contact();
        let Some(link) = DeepLink::tel(&contact.phone_number) else {
            warn!("Contact {} has no phone number to dial", contact.id);
            return Ok(());
        };

        info!("Dialing {}", link);
        self.collaborators.launcher.launch(&link).await?;
        Ok(())
    }

    async fn launch_wechat(&mut self) -> Result<()> {
        match &self.state.dialog {
            Some(dialog) if dialog.step() == DialogStep::Guide => {}
            _ => {
                debug!("WeChat launch is only offered on the guide step");
                return Ok(());
            }
        }

        let link = DeepLink::wechat_with_uri(self.wechat_uri.clone());
        self.collaborators.launcher.launch(&link).await?;
        info!("WeChat launch triggered");
        Ok(())
    }

    fn open_edit_form(&mut self) {
        let Some(dialog) = self.state.dialog.take() else {
            debug!("Ignoring edit, no dialog is open");
            return;
        };
        if dialog.step() != DialogStep::Select {
            self.state.dialog = Some(dialog);
            debug!("Edit is only offered on the selection step");
            return;
        }

        let session = self.next_session();
        self.state.form = Some(ContactForm::edit(dialog.contact(), session));
        self.state.view = View::Edit;
    }

    fn pick_avatar(&mut self, path: PathBuf) {
        let Some(form) = &self.state.form else {
            debug!("Ignoring avatar pick, no form is open");
            return;
        };

        let session = form.session();
        let reader = self.avatars;
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = reader.read_data_uri(&path).await;
            // The receiver is gone only when the dialer has shut down.
            let _ = events.send(Event::AvatarLoaded { session, result });
        });
    }

    fn avatar_loaded(&mut self, session: u64, result: AvatarResult<String>) -> Result<()> {
        let data_uri = result?;
        match self.state.form.as_mut() {
            Some(form) if form.session() == session => form.set_avatar(data_uri),
            _ => debug!("Dropping avatar for form session {}, it is no longer open", session),
        }
        Ok(())
    }

    async fn save_form(&mut self) -> Result<()> {
        let Some(form) = self.state.form.as_ref() else {
            return Ok(());
        };
        let contacts = &self.state.contacts;
        let contact = form.submit(|| ContactId::generate(Utc::now(), contacts))?;

        let mut updated = self.state.contacts.clone();
        if form.is_editing() {
            for existing in updated.iter_mut().filter(|c| c.id == contact.id) {
                *existing = contact.clone();
            }
            info!("Updated contact {}", contact.id);
        } else {
            info!("Added contact {}", contact.id);
            updated.push(contact);
        }

        self.commit(updated).await
    }

    fn cancel_form(&mut self) {
        if self.state.form.take().is_some() {
            self.state.view = View::Home;
        }
    }

    async fn delete_contact(&mut self) -> Result<()> {
        let Some(id) = self.state.editing_contact().map(|c| c.id.clone()) else {
            debug!("Ignoring delete, no contact is being edited");
            return Ok(());
        };

        if !self.collaborators.confirmer.confirm(DELETE_PROMPT).await {
            debug!("Deletion of {} declined", id);
            return Ok(());
        }

        let updated: Vec<Contact> = self
            .state
            .contacts
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        info!("Deleted contact {}", id);
        self.commit(updated).await
    }

    /// Installs the new list, returns to the home view and persists the list.
    /// A failed write leaves the in-memory list and the navigation in place.
    async fn commit(&mut self, contacts: Vec<Contact>) -> Result<()> {
        self.state.contacts = contacts;
        self.state.form = None;
        self.state.view = View::Home;
        self.collaborators.store.save(&self.state.contacts).await?;
        Ok(())
    }
}

/// Turns a handler outcome into what the user sees. Only rejected forms are
/// surfaced; every other failure is logged and otherwise ignored.
fn report(result: Result<()>) -> Option<Notice> {
    match result {
        Ok(()) => None,
        Err(DialerError::Validation(e)) => {
            debug!("Rejected form: {}", e);
            Some(Notice::Alert(e.alert().to_string()))
        }
        Err(DialerError::Storage(e)) => {
            error!("Failed to save contacts: {}", e);
            None
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
