use serde::{Deserialize, Serialize};

use crate::util::ContactId;

/// Shown on a contact tile when no avatar has been set.
pub const PLACEHOLDER_AVATAR_URL: &str = "https://picsum.photos/400/500";

/// One person the user can reach. Field names on the wire match what the
/// stored blob has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    /// The remark name the user gave this person inside WeChat.
    pub wechat_name: String,
    #[serde(default)]
    pub phone_number: String,
    /// Data URI or remote URL. Empty when unset.
    #[serde(default)]
    pub avatar: String,
    #[serde(default = "default_enabled")]
    pub enable_wechat_video: bool,
    #[serde(default = "default_enabled")]
    pub enable_wechat_audio: bool,
}

fn default_enabled() -> bool {
    true
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>, wechat_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wechat_name: wechat_name.into(),
            phone_number: String::new(),
            avatar: String::new(),
            enable_wechat_video: true,
            enable_wechat_audio: true,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn has_phone_number(&self) -> bool {
        !self.phone_number.trim().is_empty()
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar.is_empty()
    }

    /// Avatar to display, falling back to the placeholder image.
    pub fn display_avatar(&self) -> &str {
        if self.has_avatar() {
            &self.avatar
        } else {
            PLACEHOLDER_AVATAR_URL
        }
    }
}
