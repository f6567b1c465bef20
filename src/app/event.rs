use std::path::PathBuf;

use tokio::sync::mpsc;

use super::dialog::CallType;
use super::form::FormEdit;
use crate::error::AvatarResult;
use crate::util::ContactId;

/// Everything that can happen to the dialer. Sent to the single owner of the
/// state over an [`EventSender`].
#[derive(Debug)]
pub enum Event {
    /// Home screen "add" tile or the settings button.
    AddContact,
    OpenContact(ContactId),
    CloseDialog,
    StartCall(CallType),
    DialPhone,
    LaunchWechat,
    GuideBack,
    /// Leave the dialog for the edit form of its contact.
    EditContact,
    EditForm(FormEdit),
    PickAvatar(PathBuf),
    /// Completion of a [`Event::PickAvatar`] read for the form with this
    /// session number.
    AvatarLoaded {
        session: u64,
        result: AvatarResult<String>,
    },
    SaveForm,
    CancelForm,
    DeleteContact,
}

/// Message for the user that is not part of the regular screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
}

pub type EventSender = mpsc::UnboundedSender<Event>;
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;
