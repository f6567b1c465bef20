mod sections;

pub use sections::*;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

fn default_min_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub integrations: IntegrationsConfig,
    #[serde(default)]
    pub avatar: AvatarConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Config = serde_yaml::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            anyhow::bail!("storage.key must not be empty");
        }

        if self.storage.key.contains(['/', '\\']) || self.storage.key.starts_with('.') {
            anyhow::bail!("storage.key must be a plain file name: {}", self.storage.key);
        }

        if !self.integrations.wechat_uri.contains("://") {
            anyhow::bail!(
                "integrations.wechat_uri is not a URL scheme: {}",
                self.integrations.wechat_uri
            );
        }

        if self.avatar.max_bytes == 0 {
            anyhow::bail!("avatar.max_bytes must be greater than zero");
        }

        Ok(())
    }
}
