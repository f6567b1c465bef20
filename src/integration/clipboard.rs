use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::RwLock;

use super::ClipboardWriter;
use crate::error::{IntegrationError, IntegrationResult};

/// Keeps the last copied text in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Arc<RwLock<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contents(&self) -> Option<String> {
        self.text.read().await.clone()
    }
}

#[async_trait]
impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: &str) -> IntegrationResult<()> {
        *self.text.write().await = Some(text.to_string());
        Ok(())
    }
}

/// Pipes the text into an external program such as `wl-copy` or `pbcopy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ClipboardWriter for CommandClipboard {
    async fn write_text(&self, text: &str) -> IntegrationResult<()> {
        let clipboard_err =
            |e: std::io::Error| IntegrationError::Clipboard(format!("{}: {}", self.program, e));

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(clipboard_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await.map_err(clipboard_err)?;
        }

        let status = child.wait().await.map_err(clipboard_err)?;
        if !status.success() {
            return Err(IntegrationError::Clipboard(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}
