//! Configuration management

use crate::error::{DataHubError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DATAHUB_DIR: &str = ".datahub";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay applied before every auth operation
    #[serde(default)]
    pub latency_ms: u64,
    /// Refuse edits and deletes of entries owned by another account
    #[serde(default = "default_enforce_ownership")]
    pub enforce_ownership: bool,
    pub created: DateTime<Utc>,
}

fn default_enforce_ownership() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            latency_ms: 0,
            enforce_ownership: default_enforce_ownership(),
            created: Utc::now(),
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Load config from .datahub/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATAHUB_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataHubError::NotInitialized(path.to_path_buf())
            } else {
                DataHubError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DataHubError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .datahub/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let datahub_dir = path.join(DATAHUB_DIR);
        let config_path = datahub_dir.join(CONFIG_FILE);

        if !datahub_dir.exists() {
            fs::create_dir(&datahub_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DataHubError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "latency_ms" => Ok(self.latency_ms.to_string()),
            "enforce_ownership" => Ok(self.enforce_ownership.to_string()),
            "created" => Ok(self.created.to_rfc3339()),
            _ => Err(DataHubError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: latency_ms, enforce_ownership, created",
                key
            ))),
        }
    }

    /// Set a single value by key, parsing it to the field's type
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "latency_ms" => {
                self.latency_ms = value.parse().map_err(|_| {
                    DataHubError::Config(format!(
                        "Invalid latency_ms '{}': expected a whole number of milliseconds",
                        value
                    ))
                })?;
            }
            "enforce_ownership" => {
                self.enforce_ownership = value.parse().map_err(|_| {
                    DataHubError::Config(format!(
                        "Invalid enforce_ownership '{}': expected true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(DataHubError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DataHubError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: latency_ms, enforce_ownership",
                    key
                )));
            }
        }
        Ok(())
    }
}
