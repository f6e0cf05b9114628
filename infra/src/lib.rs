//! # Infrastructure Layer
//!
//! Concrete implementations behind the core collaborator traits:
//! - **Store**: process-local in-memory OTP storage and send-window
//!   tracking
//! - **Messaging**: the chat-channel gateway client and a console mock

use thiserror::Error;

// Re-export core types for convenience
pub use cv_core::errors::*;

/// Messaging module - chat-channel gateway client and mock
pub mod messaging;

/// Store module - in-memory code and window storage
pub mod store;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),
}
