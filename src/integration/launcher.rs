use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{DeepLink, ExternalLauncher};
use crate::error::{IntegrationError, IntegrationResult};

/// Hands links to an opener program (`xdg-open`, `open`, ...) and does not
/// wait for it.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    opener: String,
}

impl CommandLauncher {
    pub fn new(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }
}

#[async_trait]
impl ExternalLauncher for CommandLauncher {
    async fn launch(&self, link: &DeepLink) -> IntegrationResult<()> {
        let mut child = Command::new(&self.opener)
            .arg(link.uri())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| IntegrationError::Launch {
                uri: link.uri().to_string(),
                reason: e.to_string(),
            })?;

        let opener = self.opener.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) => debug!("{} exited with {}", opener, status),
                Err(e) => debug!("{} could not be awaited: {}", opener, e),
            }
        });
        Ok(())
    }
}
