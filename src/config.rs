//! Configuration handling for the remote collection API.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory and includes:
//! - The base URL of the collection API
//! - An optional bearer token sent with every request
//!
//! Environment variables take precedence over the file:
//! `CASTELLAN_API_URL`, `CASTELLAN_API_TOKEN`, and `CASTELLAN_CONFIG`
//! (alternate config file path).

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CastellanError, Result};

/// Base URL used when neither the environment nor the config file names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote collection API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote collection API settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the collection API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("CASTELLAN_CONFIG")
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        directories::ProjectDirs::from("", "", "castellan")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("castellan.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Resolve the API base URL, normalized to end with a trailing slash so
    /// collection paths join below it rather than replacing the last segment.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.raw_base_url();
        let raw = if raw.ends_with('/') {
            raw
        } else {
            format!("{raw}/")
        };

        Url::parse(&raw)
            .map_err(|e| CastellanError::Config(format!("invalid API base URL '{raw}': {e}")))
    }

    fn raw_base_url(&self) -> String {
        if let Ok(url) = env::var("CASTELLAN_API_URL")
            && !url.is_empty()
        {
            return url;
        }

        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get the API token from the environment or the config file
    pub fn api_token(&self) -> Option<String> {
        if let Ok(token) = env::var("CASTELLAN_API_TOKEN")
            && !token.is_empty()
        {
            return Some(token);
        }

        self.api.token.clone()
    }

    /// Get a config value by dotted key (for `config get`)
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.base_url" => Ok(self
                .api
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())),
            "api.token" => self
                .api
                .token
                .clone()
                .ok_or_else(|| CastellanError::Config("api.token is not set".to_string())),
            _ => Err(CastellanError::Config(format!(
                "unknown key '{key}', expected 'api.base_url' or 'api.token'"
            ))),
        }
    }

    /// Set a config value by dotted key (for `config set`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                // Validate before storing
                Url::parse(value).map_err(|e| {
                    CastellanError::Config(format!("invalid API base URL '{value}': {e}"))
                })?;
                self.api.base_url = Some(value.to_string());
                Ok(())
            }
            "api.token" => {
                self.api.token = Some(value.to_string());
                Ok(())
            }
            _ => Err(CastellanError::Config(format!(
                "unknown key '{key}', expected 'api.base_url' or 'api.token'"
            ))),
        }
    }
}
