mod contact_id;
mod data_uri;
mod phone;

pub use contact_id::*;
pub use data_uri::*;
pub use phone::*;
