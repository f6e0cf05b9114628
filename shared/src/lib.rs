//! Shared utilities and common types for the ChatVerify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Utility functions (phone normalization, variant expansion)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ChannelConfig, Environment, ServerConfig};
pub use types::StatusResponse;
pub use utils::phone;
