//! Mock messaging service.
//!
//! Logs messages instead of delivering them, for development and testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{info, warn};

use cv_core::errors::DeliveryError;
use cv_core::services::messaging::{MessagingServiceTrait, PairingState};
use cv_shared::utils::phone::mask_phone;

/// Mock messaging service for development and testing
///
/// This implementation:
/// - Logs outgoing messages to the console
/// - Reports the channel as always paired
/// - Tracks message count and the last message for assertions
pub struct MockMessagingService {
    /// Counter for tracking number of messages sent
    message_count: AtomicU64,
    /// Whether to simulate delivery failures (for testing)
    simulate_failure: bool,
    /// Last accepted message (recipient, text)
    last_message: Mutex<Option<(String, String)>>,
}

impl MockMessagingService {
    /// Create a new mock messaging service
    pub fn new() -> Self {
        Self {
            message_count: AtomicU64::new(0),
            simulate_failure: false,
            last_message: Mutex::new(None),
        }
    }

    /// Create a mock service that fails every delivery
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Get the last accepted message, if any
    pub fn last_message(&self) -> Option<(String, String)> {
        self.last_message.lock().unwrap().clone()
    }
}

impl Default for MockMessagingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagingServiceTrait for MockMessagingService {
    async fn send_message(&self, phone: &str, text: &str) -> Result<(), DeliveryError> {
        if self.simulate_failure {
            warn!(
                phone = %mask_phone(phone),
                "Mock messaging service simulating delivery failure"
            );
            return Err(DeliveryError::Failed("simulated delivery failure".to_string()));
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        *self.last_message.lock().unwrap() = Some((phone.to_string(), text.to_string()));

        info!(
            phone = %mask_phone(phone),
            text = text,
            "Mock messaging service delivered message"
        );
        Ok(())
    }

    async fn pairing_state(&self) -> Result<PairingState, DeliveryError> {
        Ok(PairingState {
            connected: true,
            pairing_code: None,
        })
    }
}
