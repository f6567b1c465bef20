use std::path::PathBuf;

use crate::app::{AppState, CallType, Event, FormEdit};

/// Turns typed lines into dialer events.
#[derive(Clone, Default)]
pub struct CommandProcessor;

impl CommandProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Splits a line into a lowercase command word and the untouched rest,
    /// so names containing spaces survive.
    pub fn parse_command(&self, text: &str) -> Option<(String, String)> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (command, rest) = match text.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (text, ""),
        };
        Some((command.to_lowercase(), rest.to_string()))
    }

    pub fn process(&self, command: &str, args: &str, state: &AppState) -> CommandResult {
        match command {
            "help" | "h" | "?" => self.cmd_help(),
            "quit" | "exit" | "q" => CommandResult::Quit,
            "add" | "settings" => CommandResult::Event(Event::AddContact),
            "open" => self.cmd_open(args, state),
            "video" => CommandResult::Event(Event::StartCall(CallType::Video)),
            "audio" => CommandResult::Event(Event::StartCall(CallType::Audio)),
            "phone" => CommandResult::Event(Event::DialPhone),
            "wechat" => CommandResult::Event(Event::LaunchWechat),
            "back" => CommandResult::Event(Event::GuideBack),
            "close" => CommandResult::Event(Event::CloseDialog),
            "edit" => CommandResult::Event(Event::EditContact),
            "name" => CommandResult::Event(Event::EditForm(FormEdit::Name(args.to_string()))),
            "remark" => {
                CommandResult::Event(Event::EditForm(FormEdit::WechatName(args.to_string())))
            }
            "phone-number" => {
                CommandResult::Event(Event::EditForm(FormEdit::PhoneNumber(args.to_string())))
            }
            "video-toggle" => CommandResult::Event(Event::EditForm(FormEdit::ToggleVideo)),
            "audio-toggle" => CommandResult::Event(Event::EditForm(FormEdit::ToggleAudio)),
            "avatar" => self.cmd_avatar(args),
            "save" => CommandResult::Event(Event::SaveForm),
            "cancel" => CommandResult::Event(Event::CancelForm),
            "delete" => CommandResult::Event(Event::DeleteContact),
            _ => CommandResult::Error(format!("Unknown command: {}", command)),
        }
    }

    fn cmd_help(&self) -> CommandResult {
        CommandResult::Help(
            r#"Available commands:
- add: Add a contact
- open <n>: Open the call dialog for contact number n
- video / audio: Start a WeChat video or audio call
- phone: Dial the contact's phone number
- wechat: Open WeChat (from the call guide)
- back: Return from the call guide
- edit: Edit the contact (from the call dialog)
- close: Close the call dialog
- name <text>, remark <text>, phone-number <text>: Fill in the form
- avatar <path>: Use an image file as the photo (avatar clear removes it)
- video-toggle / audio-toggle: Switch WeChat video or audio on or off
- save / cancel: Save or leave the form
- delete: Delete the contact being edited
- quit: Exit
"#
            .to_string(),
        )
    }

    fn cmd_open(&self, args: &str, state: &AppState) -> CommandResult {
        let Ok(position) = args.parse::<usize>() else {
            return CommandResult::Error("Usage: open <n>".to_string());
        };
        match state.nth(position) {
            Some(contact) => CommandResult::Event(Event::OpenContact(contact.id.clone())),
            None => CommandResult::Error(format!("No contact number {}", position)),
        }
    }

    fn cmd_avatar(&self, args: &str) -> CommandResult {
        match args {
            "" => CommandResult::Error("Usage: avatar <path>|clear".to_string()),
            "clear" => CommandResult::Event(Event::EditForm(FormEdit::ClearAvatar)),
            path => CommandResult::Event(Event::PickAvatar(PathBuf::from(path))),
        }
    }
}

#[derive(Debug)]
pub enum CommandResult {
    Event(Event),
    Help(String),
    Error(String),
    Quit,
}
