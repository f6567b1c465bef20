use std::path::Path;

use tracing::debug;

use crate::config::DEFAULT_AVATAR_MAX_BYTES;
use crate::error::{AvatarError, AvatarResult};
use crate::util::{encode_data_uri, image_mime_type};

/// Turns an image file into a data URI that can be stored inline with the
/// contact.
#[derive(Debug, Clone, Copy)]
pub struct AvatarReader {
    max_bytes: u64,
}

impl Default for AvatarReader {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_MAX_BYTES)
    }
}

impl AvatarReader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub async fn read_data_uri(&self, path: &Path) -> AvatarResult<String> {
        let mime = image_mime_type(path)
            .ok_or_else(|| AvatarError::UnsupportedType(path.display().to_string()))?;
        let read_err = |source| AvatarError::Read {
            path: path.display().to_string(),
            source,
        };

        let size = tokio::fs::metadata(path).await.map_err(read_err)?.len();
        if size > self.max_bytes {
            return Err(AvatarError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let bytes = tokio::fs::read(path).await.map_err(read_err)?;
        debug!("Read {} byte avatar from {}", bytes.len(), path.display());
        Ok(encode_data_uri(mime, &bytes))
    }
}
