use once_cell::sync::Lazy;
use regex::Regex;

pub static PHONE_SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("phone separator regex is valid"));

/// Strips the separators people type into phone numbers.
pub fn normalize_phone_number(raw: &str) -> String {
    PHONE_SEPARATOR_REGEX.replace_all(raw.trim(), "").to_string()
}

/// Builds a `tel:` link, or `None` when there is no number to dial.
pub fn tel_uri(raw: &str) -> Option<String> {
    let number = normalize_phone_number(raw);
    if number.is_empty() {
        return None;
    }

    let (prefix, rest) = match number.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", number.as_str()),
    };

    Some(format!("tel:{}{}", prefix, urlencoding::encode(rest)))
}
