//! Settings persisted between runs.
//!
//! The file lives at `~/.config/tzh/config.toml`:
//!
//! ```toml
//! endpoint = "https://api.deepseek.com/v1"
//! model = "deepseek-chat"
//! api_key = "sk-..."
//! timeout = 30
//! temperature = 1.3
//! max_tokens = 2000
//! ```

mod store;

pub use store::ConfigStore;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TzhError};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TEMPERATURE: f32 = 1.3;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

const fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

const fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

/// Endpoint, model and credentials used for every translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the OpenAI-compatible API (e.g. `https://api.deepseek.com/v1`).
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Bearer token for the provider.
    pub api_key: String,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Sampling temperature, 0.0 to 2.0.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Completion token cap; 0 leaves it to the provider.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Config {
    /// Creates a config with default tuning values.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("endpoint '{}' is not a valid URL: {e}", self.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "endpoint '{}' must use http or https",
                self.endpoint
            ));
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.api_key.trim().is_empty() {
            return Err("api key must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if self.timeout == 0 {
            return Err("timeout must be at least 1 second".to_string());
        }
        Ok(())
    }

    /// Token cap to send, if any.
    pub const fn max_tokens_cap(&self) -> Option<u32> {
        if self.max_tokens == 0 {
            None
        } else {
            Some(self.max_tokens)
        }
    }
}

/// Values given to `tzh c`, applied on top of the saved config.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
    /// `Some(0)` clears the cap.
    pub max_tokens: Option<u32>,
    pub timeout: Option<u64>,
}

impl ConfigUpdate {
    pub const fn is_empty(&self) -> bool {
        self.endpoint.is_none()
            && self.model.is_none()
            && self.api_key.is_none()
            && self.temperature.is_none()
            && self.max_tokens.is_none()
            && self.timeout.is_none()
    }

    /// Merges the update onto `base` and validates the result.
    ///
    /// Without a base, endpoint, model and api key must all be given.
    pub fn apply(self, base: Option<Config>) -> Result<Config> {
        let mut config = match base {
            Some(config) => config,
            None => Config::new(
                self.endpoint.clone().ok_or_else(|| missing_flag("--endpoint"))?,
                self.model.clone().ok_or_else(|| missing_flag("--model"))?,
                self.api_key.clone().ok_or_else(|| missing_flag("--api-key"))?,
            ),
        };

        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(model) = self.model {
            config.model = model.trim().to_string();
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key.trim().to_string();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        config.validate().map_err(TzhError::Usage)?;
        Ok(config)
    }
}

fn missing_flag(flag: &str) -> TzhError {
    TzhError::Usage(format!(
        "Missing required option '{flag}'\n\n\
         No configuration is saved yet, so endpoint, model and api key must all be given:\n  \
         tzh c --endpoint <url> --model <name> --api-key <key>"
    ))
}
