use crate::contact::Contact;
use crate::error::ValidationError;
use crate::util::ContactId;

/// A single change to the form, as typed or toggled by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Name(String),
    WechatName(String),
    PhoneNumber(String),
    ToggleVideo,
    ToggleAudio,
    ClearAvatar,
}

/// Working copy of a contact while it is being added or edited. Nothing here
/// reaches the stored list until [`ContactForm::submit`] succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    original: Option<Contact>,
    session: u64,
    pub name: String,
    pub wechat_name: String,
    pub phone_number: String,
    pub avatar: String,
    pub enable_wechat_video: bool,
    pub enable_wechat_audio: bool,
}

impl ContactForm {
    pub fn new(session: u64) -> Self {
        Self {
            original: None,
            session,
            name: String::new(),
            wechat_name: String::new(),
            phone_number: String::new(),
            avatar: String::new(),
            enable_wechat_video: true,
            enable_wechat_audio: true,
        }
    }

    pub fn edit(contact: &Contact, session: u64) -> Self {
        Self {
            original: Some(contact.clone()),
            session,
            name: contact.name.clone(),
            wechat_name: contact.wechat_name.clone(),
            phone_number: contact.phone_number.clone(),
            avatar: contact.avatar.clone(),
            enable_wechat_video: contact.enable_wechat_video,
            enable_wechat_audio: contact.enable_wechat_audio,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn original(&self) -> Option<&Contact> {
        self.original.as_ref()
    }

    /// Identifies this form instance so late avatar reads can't land in a
    /// form opened afterwards.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Name(name) => self.name = name,
            FormEdit::WechatName(wechat_name) => self.wechat_name = wechat_name,
            FormEdit::PhoneNumber(phone_number) => self.phone_number = phone_number,
            FormEdit::ToggleVideo => self.enable_wechat_video = !self.enable_wechat_video,
            FormEdit::ToggleAudio => self.enable_wechat_audio = !self.enable_wechat_audio,
            FormEdit::ClearAvatar => self.avatar.clear(),
        }
    }

    pub fn set_avatar(&mut self, data_uri: String) {
        self.avatar = data_uri;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.wechat_name.trim().is_empty() {
            return Err(ValidationError::MissingWechatName);
        }
        Ok(())
    }

    /// Builds the record to store. An edited contact keeps its id; a new one
    /// gets the id produced by `mint`, which is only called on success.
    pub fn submit(&self, mint: impl FnOnce() -> ContactId) -> Result<Contact, ValidationError> {
        self.validate()?;

        let id = match &self.original {
            Some(original) => original.id.clone(),
            None => mint(),
        };

        Ok(Contact {
            id,
            name: self.name.trim().to_string(),
            wechat_name: self.wechat_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            avatar: self.avatar.clone(),
            enable_wechat_video: self.enable_wechat_video,
            enable_wechat_audio: self.enable_wechat_audio,
        })
    }
}
