use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialerError {
    #[error("Storage error: {0}")]
    Storage(#[source] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[source] ValidationError),

    #[error("Avatar error: {0}")]
    Avatar(#[source] AvatarError),

    #[error("Integration error: {0}")]
    Integration(#[source] IntegrationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("failed to serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,

    #[error("wechat remark is required")]
    MissingWechatName,
}

impl ValidationError {
    /// Alert shown to the user when a form submission is rejected.
    pub fn alert(&self) -> &'static str {
        "请填写姓名和微信备注"
    }
}

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not an image file: {0}")]
    UnsupportedType(String),

    #[error("image too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to launch {uri}: {reason}")]
    Launch { uri: String, reason: String },
}

impl From<StorageError> for DialerError {
    fn from(e: StorageError) -> Self {
        DialerError::Storage(e)
    }
}

impl From<ValidationError> for DialerError {
    fn from(e: ValidationError) -> Self {
        DialerError::Validation(e)
    }
}

impl From<AvatarError> for DialerError {
    fn from(e: AvatarError) -> Self {
        DialerError::Avatar(e)
    }
}

impl From<IntegrationError> for DialerError {
    fn from(e: IntegrationError) -> Self {
        DialerError::Integration(e)
    }
}

pub type Result<T> = std::result::Result<T, DialerError>;
pub type StorageResult<T> = std::result::Result<T, StorageError>;
pub type AvatarResult<T> = std::result::Result<T, AvatarError>;
pub type IntegrationResult<T> = std::result::Result<T, IntegrationError>;
