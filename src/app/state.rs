use super::dialog::CallDialog;
use super::form::ContactForm;
use crate::contact::Contact;
use crate::util::ContactId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Add,
    Edit,
}

/// Everything the screen shows. Owned by [`super::Dialer`]; views only get a
/// shared reference.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(super) contacts: Vec<Contact>,
    pub(super) view: View,
    pub(super) form: Option<ContactForm>,
    pub(super) dialog: Option<CallDialog>,
}

impl AppState {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            ..Self::default()
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    pub fn dialog(&self) -> Option<&CallDialog> {
        self.dialog.as_ref()
    }

    /// Contact whose call dialog is open.
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.dialog.as_ref().map(|d| d.contact())
    }

    /// Contact the edit form was opened for.
    pub fn editing_contact(&self) -> Option<&Contact> {
        self.form.as_ref().and_then(|f| f.original())
    }

    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Contact by its 1-based position on the home screen.
    pub fn nth(&self, position: usize) -> Option<&Contact> {
        position.checked_sub(1).and_then(|i| self.contacts.get(i))
    }
}
