//! Domain entities and value objects
//!
//! This module contains the core domain entities that represent the
//! business concepts of the Xebula API.

pub mod config;
pub mod entity;
pub mod network;
pub mod tron;
pub mod wallet;

// Re-export entities
pub use config::*;
pub use entity::*;
pub use network::*;
pub use tron::*;
pub use wallet::*;
