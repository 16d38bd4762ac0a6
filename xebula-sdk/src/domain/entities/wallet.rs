//! Wallet entity
//!
//! A wallet binds a configuration to the network that would supply its keys.
//! Creation is not available yet and reports so instead of succeeding.

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::config::Config;
use crate::domain::entities::network::KeyGenerator;
use crate::shared::error::XebulaError;

#[derive(Clone)]
pub struct Wallet {
    pub config: Config,
    pub network: Arc<dyn KeyGenerator>,
}

impl Wallet {
    pub fn new(network: Arc<dyn KeyGenerator>) -> Self {
        Self::with_config(Config::default(), network)
    }

    pub fn with_config(config: Config, network: Arc<dyn KeyGenerator>) -> Self {
        Self { config, network }
    }

    /// Create the wallet on its network
    pub fn create(&self) -> Result<(), XebulaError> {
        log::debug!("Wallet creation requested for {}", self.config.base_url);
        Err(XebulaError::not_implemented("Wallet::create"))
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
