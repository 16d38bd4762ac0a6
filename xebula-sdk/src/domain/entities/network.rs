//! Network entity for the Xebula SDK

use serde::{Deserialize, Serialize};

use crate::domain::entities::config::Config;
use crate::shared::error::XebulaError;

/// Signing curve a network would use for its keys
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Curve {
    Secp256k1,
    Ed25519,
}

impl Curve {
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Secp256k1 => "secp256k1",
            Curve::Ed25519 => "ed25519",
        }
    }
}

/// Configuration shared by every concrete network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    pub config: Config,
    pub curve: Option<Curve>,
}

impl Network {
    pub fn new(config: Config) -> Self {
        Self { config, curve: None }
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }
}

/// Key material source for a network
pub trait KeyGenerator: Send + Sync {
    fn generate_private_key(&self) -> Result<Vec<u8>, XebulaError>;
}
