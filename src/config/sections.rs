use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "family_connect_contacts";
pub const DEFAULT_WECHAT_URI: &str = "weixin://";
pub const DEFAULT_AVATAR_MAX_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_storage_directory(),
            key: default_storage_key(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationsConfig {
    /// Program that opens deep links, e.g. `xdg-open` or `open`.
    #[serde(default = "default_opener")]
    pub opener: String,
    /// Program that receives clipboard text on stdin, e.g. `wl-copy`.
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default = "default_wechat_uri")]
    pub wechat_uri: String,
}

fn default_opener() -> String {
    "xdg-open".to_string()
}

fn default_wechat_uri() -> String {
    DEFAULT_WECHAT_URI.to_string()
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            opener: default_opener(),
            clipboard_command: None,
            wechat_uri: default_wechat_uri(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvatarConfig {
    #[serde(default = "default_avatar_max_bytes")]
    pub max_bytes: u64,
}

fn default_avatar_max_bytes() -> u64 {
    DEFAULT_AVATAR_MAX_BYTES
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_avatar_max_bytes(),
        }
    }
}

/// Static texts shown by the header widget. None of them are computed.
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_lunar")]
    pub lunar: String,
    #[serde(default = "default_weather")]
    pub weather: String,
    #[serde(default = "default_steps")]
    pub steps: String,
}

fn default_lunar() -> String {
    "十月 廿九".to_string()
}

fn default_weather() -> String {
    "阴 20°C".to_string()
}

fn default_steps() -> String {
    "0步".to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            lunar: default_lunar(),
            weather: default_weather(),
            steps: default_steps(),
        }
    }
}
