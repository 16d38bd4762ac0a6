//! Xebula SDK
//!
//! REST binding for the Xebula service.
//!
//! ## Architecture
//!
//! - **Core**: the generic JSON HTTP client every call goes through
//! - **Domain**: configuration, API entity, network and wallet types
//! - **Shared**: common types, constants, errors and utilities
//!
//! A call flows from the caller through [`Entity::build_url`], the HTTP
//! dispatcher, and JSON decoding (with response cookies injected under
//! `"$cookies$"`), ending in either the decoded value or a typed error.
//!
//! ## Usage
//!
//! ```no_run
//! use xebula_sdk::{Config, HttpMethod, Xebula};
//!
//! # async fn run() -> Result<(), xebula_sdk::XebulaError> {
//! let xebula = Xebula::new(Config::default());
//! let entity = xebula.entity()?;
//!
//! let networks: serde_json::Value = entity
//!     .api_call("/networks", HttpMethod::Get, None, &[])
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod shared;

// Re-export specific components
pub use crate::core::http::{HttpClient, HttpResponse, RequestBody};

// Re-export domain entities
pub use crate::domain::{Config, Curve, Entity, KeyGenerator, Network, TronNetwork, Wallet};

// Re-export shared types
pub use shared::error::{HttpError, XebulaError};
pub use shared::types::{BasicAuth, Header, HttpMethod, ResponseCookie, SameSite};

/// Initialize logging
pub fn init() {
    // A host application may already own the logger
    if env_logger::try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the SDK with configuration from .env or safe defaults
pub fn init_xebula() -> Result<Xebula, XebulaError> {
    init();
    let config = Config::from_env()?;
    log::info!("Xebula SDK {} targeting {}", VERSION, config.base_url);
    Ok(Xebula::new(config))
}

/// Main SDK struct that provides access to all functionality
#[derive(Debug, Clone)]
pub struct Xebula {
    config: Config,
    tron: TronNetwork,
}

impl Xebula {
    pub fn new(config: Config) -> Self {
        Self {
            tron: TronNetwork::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tron(&self) -> &TronNetwork {
        &self.tron
    }

    /// An API entity over this client's configuration
    pub fn entity(&self) -> Result<Entity, XebulaError> {
        Entity::new(self.config.clone())
    }

    /// A wallet bound to the Tron network
    pub fn wallet(&self) -> Wallet {
        Wallet::with_config(self.config.clone(), Arc::new(self.tron.clone()))
    }
}

impl Default for Xebula {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
