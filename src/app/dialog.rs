use std::fmt;
use std::str::FromStr;

use crate::contact::Contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallType {
    #[default]
    Video,
    Audio,
}

impl CallType {
    /// Name of the menu entry inside WeChat that starts this kind of call.
    pub fn menu_label(self) -> &'static str {
        match self {
            CallType::Video => "视频通话",
            CallType::Audio => "语音通话",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallType::Video => f.write_str("video"),
            CallType::Audio => f.write_str("audio"),
        }
    }
}

impl FromStr for CallType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(CallType::Video),
            "audio" | "voice" => Ok(CallType::Audio),
            other => anyhow::bail!("unknown call type: {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogStep {
    #[default]
    Select,
    Guide,
}

/// The call overlay for one contact.
///
/// Starts at [`DialogStep::Select`]. Picking video or audio moves to
/// [`DialogStep::Guide`]; `back` is the only way out of the guide. The dialog
/// never learns whether a call was actually placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDialog {
    contact: Contact,
    step: DialogStep,
    call_type: CallType,
    copied: bool,
}

impl CallDialog {
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            step: DialogStep::Select,
            call_type: CallType::default(),
            copied: false,
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn step(&self) -> DialogStep {
        self.step
    }

    pub fn call_type(&self) -> CallType {
        self.call_type
    }

    /// Whether the remark name made it onto the clipboard at some point
    /// while this dialog was open.
    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn start_call(&mut self, call_type: CallType) {
        self.call_type = call_type;
        self.step = DialogStep::Guide;
    }

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    /// Returns to the selection screen. False if already there.
    pub fn back(&mut self) -> bool {
        if self.step == DialogStep::Guide {
            self.step = DialogStep::Select;
            true
        } else {
            false
        }
    }

    pub fn can_close(&self) -> bool {
        self.step == DialogStep::Select
    }

    pub fn guide_steps(&self) -> [String; 3] {
        [
            "点击下方蓝色按钮，打开微信".to_string(),
            format!("在微信列表里，点一下“{}”的头像", self.contact.wechat_name),
            format!("点右下角的加号(+)，点{}", self.call_type.menu_label()),
        ]
    }
}
