use std::fmt::Write;

use crate::app::{CallDialog, DialogStep};

pub fn render_dialog(dialog: &CallDialog) -> String {
    match dialog.step() {
        DialogStep::Select => render_select(dialog),
        DialogStep::Guide => render_guide(dialog),
    }
}

fn render_select(dialog: &CallDialog) -> String {
    let contact = dialog.contact();
    let mut out = String::new();
    let _ = writeln!(out, "{}", contact.name);
    let _ = writeln!(out, "微信备注：{}", contact.wechat_name);
    out.push('\n');
    out.push_str("[video] 微信视频 - 面对面聊天\n");
    out.push_str("[audio] 微信语音 - 只说话不看脸\n");
    out.push_str("[phone] 手机拨打 - 不需要流量\n");
    out.push_str("[edit] 修改资料    [close] 取消\n");
    out
}

fn render_guide(dialog: &CallDialog) -> String {
    let contact = dialog.contact();
    let mut out = String::new();
    out.push_str("[back] 返回    微信呼叫引导\n\n");
    let _ = writeln!(out, "正在找：{}", contact.name);
    let _ = writeln!(out, "微信备注：{}", contact.wechat_name);
    out.push('\n');
    for (i, step) in dialog.guide_steps().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }
    if dialog.copied() {
        out.push_str("\n已帮您记住了名字 (搜索时长按可粘贴)\n");
    }
    let _ = writeln!(out, "\n[wechat] 去微信找 {} ->", contact.name);
    out
}
