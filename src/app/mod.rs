mod avatar;
mod dialer;
mod dialog;
mod event;
mod form;
mod state;

pub use avatar::AvatarReader;
pub use dialer::{Collaborators, DELETE_PROMPT, Dialer, DialerSettings};
pub use dialog::{CallDialog, CallType, DialogStep};
pub use event::{Event, EventReceiver, EventSender, Notice};
pub use form::{ContactForm, FormEdit};
pub use state::{AppState, View};
