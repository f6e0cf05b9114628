//! Messaging channel module
//!
//! Implementations of the messaging collaborator:
//!
//! - **Gateway client**: talks to the external chat-channel gateway over
//!   HTTP for production delivery and pairing state
//! - **Mock implementation**: console output for development and tests
//!
//! The capability is resolved exactly once at startup via
//! [`create_messaging_service`]; when initialization fails the process
//! keeps running without a channel and call sites see it as absent.

use std::sync::Arc;

use cv_core::services::messaging::MessagingServiceTrait;
use cv_shared::config::ChannelConfig;

pub mod gateway;
pub mod mock;

// Re-export commonly used types
pub use gateway::ChatGatewayService;
pub use mock::MockMessagingService;

#[cfg(test)]
mod tests;

/// Create the messaging service selected by configuration.
///
/// Returns `None` when the configured provider fails to initialize; the
/// rest of the service stays functional and code delivery reports the
/// channel as disconnected. The resolution is never re-attempted per
/// call.
pub fn create_messaging_service(config: &ChannelConfig) -> Option<Arc<dyn MessagingServiceTrait>> {
    match config.provider.as_str() {
        "mock" => Some(Arc::new(MockMessagingService::new())),
        "gateway" => match ChatGatewayService::new(config.clone()) {
            Ok(service) => Some(Arc::new(service)),
            Err(e) => {
                tracing::error!("Failed to initialize chat gateway client: {}", e);
                tracing::warn!("Continuing without a messaging channel; code delivery is disabled");
                None
            }
        },
        other => {
            tracing::warn!(
                "Unknown messaging provider '{}', using mock implementation",
                other
            );
            Some(Arc::new(MockMessagingService::new()))
        }
    }
}
