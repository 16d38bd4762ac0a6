//! Tron network placeholder

use crate::domain::entities::config::Config;
use crate::domain::entities::network::{Curve, KeyGenerator, Network};
use crate::shared::error::XebulaError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TronNetwork {
    pub network: Network,
}

impl TronNetwork {
    pub fn new(config: Config) -> Self {
        Self {
            network: Network::new(config).with_curve(Curve::Secp256k1),
        }
    }

    pub fn config(&self) -> &Config {
        &self.network.config
    }
}

impl KeyGenerator for TronNetwork {
    fn generate_private_key(&self) -> Result<Vec<u8>, XebulaError> {
        // No key generation exists yet for any network
        Err(XebulaError::not_implemented("TronNetwork::generate_private_key"))
    }
}
