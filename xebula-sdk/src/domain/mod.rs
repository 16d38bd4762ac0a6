//! Domain layer - entities
//!
//! This module contains the configuration, API entity, network and wallet
//! types of the SDK.

pub mod entities;

// Re-export domain components
pub use entities::*;
