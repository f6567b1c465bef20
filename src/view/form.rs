use std::fmt::Write;

use crate::app::ContactForm;
use crate::util::decode_data_uri;

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn avatar_status(avatar: &str) -> String {
    if avatar.is_empty() {
        return "未设置 (点击头像上传/修改对方照片)".to_string();
    }
    match decode_data_uri(avatar) {
        Some((mime, bytes)) => format!("已上传 {} ({} KB)", mime, bytes.len().div_ceil(1024)),
        None => avatar.to_string(),
    }
}

pub fn render_form(form: &ContactForm) -> String {
    let mut out = String::new();
    let title = if form.is_editing() { "修改联系人" } else { "添加联系人" };

    let _ = writeln!(out, "< {}", title);
    let _ = writeln!(out, "头像: {}", avatar_status(&form.avatar));
    let _ = writeln!(out, "姓名 *: {}", form.name);
    let _ = writeln!(out, "微信备注 * (与微信内备注保持一致): {}", form.wechat_name);
    let _ = writeln!(
        out,
        "一键拨打 *: {} 微信语音  {} 微信视频",
        checkbox(form.enable_wechat_audio),
        checkbox(form.enable_wechat_video)
    );
    let _ = writeln!(out, "手机号码: {}", form.phone_number);
    out.push_str("\n[保存]");
    if form.is_editing() {
        out.push_str("  [删除联系人]");
    }
    out.push('\n');
    out
}
