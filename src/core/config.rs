use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Backend used when no endpoint has been configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Auto-refresh interval used when none has been configured.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the monitoring backend
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Dashboard auto-refresh interval in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        let config = if !config_path.exists() {
            Config::default()
        } else {
            let data = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

            // If the file is empty or corrupted, return default config
            if data.trim().is_empty() {
                Config::default()
            } else {
                serde_json::from_str(&data).unwrap_or_else(|_| {
                    // If deserialization fails, return default config
                    // (this can happen when the config format changes)
                    Config::default()
                })
            }
        };

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(&config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("aquaflow").join("config.json"))
    }

    pub fn set_endpoint(&mut self, url: String) {
        self.endpoint = Some(url);
    }

    /// Configured endpoint, falling back to the default backend.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn set_poll_interval(&mut self, secs: u64) {
        self.poll_interval_secs = secs;
    }
}
