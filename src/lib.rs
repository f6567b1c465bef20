pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod host;
pub mod integration;
pub mod store;
pub mod util;
pub mod view;

pub const NAME: &str = "family-dialer";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
