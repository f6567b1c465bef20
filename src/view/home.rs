use std::fmt::Write;

use crate::contact::Contact;

pub fn render_tiles(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for (i, contact) in contacts.iter().enumerate() {
        let picture = if contact.has_avatar() {
            "图片".to_string()
        } else {
            contact.display_avatar().to_string()
        };
        let _ = writeln!(out, "[{}] {}  ({})", i + 1, contact.name, picture);
    }
    out.push_str("[+] 添加\n");
    out
}
