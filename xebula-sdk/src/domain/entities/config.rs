//! Client configuration shared by every entity, network and wallet

use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_BASE_URL, ENV_PASSWORD, ENV_TIMEOUT_MS, ENV_USERNAME,
};
use crate::shared::error::XebulaError;
use crate::shared::types::{BasicAuth, Header};
use crate::shared::utils::{env_u64, env_var};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout_ms: u64,
    pub basic_auth: Option<BasicAuth>,
    /// Headers sent with every API call, ahead of per-call headers
    pub default_headers: Vec<Header>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT,
            basic_auth: None,
            default_headers: Vec::new(),
        }
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Load configuration from `.env` (if present) and `XEBULA_*` variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, XebulaError> {
        dotenv().ok();

        let mut config = Self::default();
        if let Some(base_url) = env_var(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout_ms) = env_u64(ENV_TIMEOUT_MS)? {
            config.timeout_ms = timeout_ms;
        }

        let username = env_var(ENV_USERNAME).unwrap_or_default();
        let password = env_var(ENV_PASSWORD).unwrap_or_default();
        let auth = BasicAuth::new(username, password);
        if auth.is_set() {
            config.basic_auth = Some(auth);
        }

        config.validate()?;
        log::debug!("Loaded Xebula configuration for {}", config.base_url);
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth::new(username, password));
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push(Header::new(key, value));
        self
    }

    pub fn validate(&self) -> Result<(), XebulaError> {
        if self.base_url.trim().is_empty() {
            return Err(XebulaError::config("Base URL cannot be empty"));
        }
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| XebulaError::config(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        if self.timeout_ms == 0 {
            return Err(XebulaError::config("Timeout must be greater than zero"));
        }
        Ok(())
    }
}
