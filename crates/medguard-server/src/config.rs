//! Service configuration.
//!
//! An optional JSON file (path in `MEDGUARD_CONFIG`) provides the base
//! layer; individual environment variables override it. Anything unset
//! falls back to the defaults below.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "MEDGUARD_CONFIG";
pub const BIND_ADDR_VAR: &str = "MEDGUARD_BIND_ADDR";
pub const COMPLETION_URL_VAR: &str = "MEDGUARD_COMPLETION_URL";
pub const MODEL_VAR: &str = "MEDGUARD_MODEL";
pub const NER_URL_VAR: &str = "MEDGUARD_NER_URL";
pub const HTTP_TIMEOUT_VAR: &str = "MEDGUARD_HTTP_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Ollama-compatible generate endpoint.
    pub completion_url: String,
    pub model: String,
    /// NER sidecar endpoint.
    pub ner_url: String,
    /// Upper bound on each outbound call, connect included.
    pub http_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".to_string(),
            completion_url: medguard_llm::client::DEFAULT_ENDPOINT.to_string(),
            model: medguard_llm::client::DEFAULT_MODEL.to_string(),
            ner_url: medguard_ner::tagger::DEFAULT_ENDPOINT.to_string(),
            http_timeout_secs: 120,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value;
        }
        if let Some(value) = lookup(COMPLETION_URL_VAR) {
            config.completion_url = value;
        }
        if let Some(value) = lookup(MODEL_VAR) {
            config.model = value;
        }
        if let Some(value) = lookup(NER_URL_VAR) {
            config.ner_url = value;
        }
        if let Some(value) = lookup(HTTP_TIMEOUT_VAR) {
            config.http_timeout_secs = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: HTTP_TIMEOUT_VAR,
                    value: value.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: HTTP_TIMEOUT_VAR,
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}
