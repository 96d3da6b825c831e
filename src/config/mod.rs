use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::ClientError;

fn default_base_url() -> String {
    consts::DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u64 {
    consts::CONNECT_TIMEOUT_SECS
}

fn default_read_timeout() -> u64 {
    consts::READ_TIMEOUT_SECS
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            read_timeout_secs: default_read_timeout(),
            request_timeout_secs: None,
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<ClientConfig, ClientError>;
}

/// Reads the client settings from the process environment, after loading `.env` if present.
pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn load_with<F>(lookup: F) -> Result<ClientConfig, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(consts::ENV_API_KEY).ok_or_else(|| {
            ClientError::ConfigError(format!("{} is not set", consts::ENV_API_KEY))
        })?;

        let mut config = ClientConfig::new(api_key);
        if let Some(base_url) = lookup(consts::ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup(consts::ENV_REQUEST_TIMEOUT) {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                ClientError::ConfigError(format!("{}: {}", consts::ENV_REQUEST_TIMEOUT, e))
            })?;
            config.request_timeout_secs = Some(secs);
        }

        Ok(config)
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<ClientConfig, ClientError> {
        dotenv::dotenv().ok();
        Self::load_with(|name| std::env::var(name).ok())
    }
}

/// Reads a JSON config file whose `api_key` names the environment variable holding the key.
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path =
            lookup(consts::ENV_CONFIG_FILE).unwrap_or(consts::DEFAULT_CONFIG_FILE.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load_with<F>(&self, lookup: F) -> Result<ClientConfig, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_str = std::fs::read_to_string(&self.path)?;
        let mut config: ClientConfig = serde_json::from_str(&config_str)
            .map_err(|e| ClientError::ConfigError(format!("{}: {}", self.path.display(), e)))?;

        config.api_key = lookup(&config.api_key).ok_or_else(|| {
            ClientError::ConfigError(format!("{} is not set", config.api_key))
        })?;

        Ok(config)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<ClientConfig, ClientError> {
        dotenv::dotenv().ok();
        self.load_with(|name| std::env::var(name).ok())
    }
}

/// Loads from the file named by `COMPLETIONS_CONFIG_FILE` when it is set, from the environment otherwise.
pub fn load_config() -> Result<ClientConfig, ClientError> {
    dotenv::dotenv().ok();
    load_config_with(|name| std::env::var(name).ok())
}

pub(crate) fn load_config_with<F>(lookup: F) -> Result<ClientConfig, ClientError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(consts::ENV_CONFIG_FILE) {
        Some(path) => {
            log::debug!("Loading client config from {}", path);
            FileConfigLoader::new(path).load_with(lookup)
        }
        None => {
            log::debug!("Loading client config from environment");
            EnvConfigLoader::load_with(lookup)
        }
    }
}
