//! Seams to the world outside the dialer: clipboard, deep-link launching and
//! the yes/no prompt. None of them report whether the user actually got
//! anywhere; callers treat them as best effort.

mod clipboard;
mod launcher;

pub use clipboard::*;
pub use launcher::*;

use std::fmt;

use async_trait::async_trait;

use crate::config::DEFAULT_WECHAT_URI;
use crate::error::IntegrationResult;
use crate::util::tel_uri;

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> IntegrationResult<()>;
}

/// Asks the environment to open a link. Returning `Ok` only means the request
/// was handed off.
#[async_trait]
pub trait ExternalLauncher: Send + Sync {
    async fn launch(&self, link: &DeepLink) -> IntegrationResult<()>;
}

/// Blocking yes/no question put to the user.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// Phone dialer link, already normalized.
    Tel(String),
    /// Launch the messaging app, no parameters.
    WeChat(String),
}

impl DeepLink {
    pub fn tel(phone_number: &str) -> Option<Self> {
        tel_uri(phone_number).map(DeepLink::Tel)
    }

    pub fn wechat() -> Self {
        DeepLink::WeChat(DEFAULT_WECHAT_URI.to_string())
    }

    pub fn wechat_with_uri(uri: impl Into<String>) -> Self {
        DeepLink::WeChat(uri.into())
    }

    pub fn uri(&self) -> &str {
        match self {
            DeepLink::Tel(uri) | DeepLink::WeChat(uri) => uri,
        }
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}
