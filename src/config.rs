//! Service Configuration
//!
//! Layered: built-in defaults, then an optional TOML file, then environment variables
//! (`MY_API_KEY`, `PORT`), then command-line flags applied by the binary.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_API_KEY: &str = "MY_API_KEY";
pub const ENV_PORT: &str = "PORT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub training: TrainingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            api_key: None,
        }
    }
}

/// Where to load the catalog from; the bundled catalog is used when `path` is unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub duration_secs: u64,
    pub model_version: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            duration_secs: 5,
            model_version: "v1.0.0".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reads the file if one is given, then applies the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies `MY_API_KEY` and `PORT` as returned by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.server.api_key = Some(key);
        }

        if let Some(port) = lookup(ENV_PORT) {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: ENV_PORT.to_string(),
                    message: e.to_string(),
                })?;
            self.server.bind.set_port(port);
        }

        Ok(())
    }

    /// The configured secret; absent or empty is an error.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.server.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_key()?;
        if self.training.model_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "training.model_version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn training_duration(&self) -> Duration {
        Duration::from_secs(self.training.duration_secs)
    }
}
