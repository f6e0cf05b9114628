//! Messaging-channel collaborator contract.
//!
//! The channel is the single delivery mechanism for verification codes.
//! Its client lives in the infrastructure layer; this module only defines
//! the interface the OTP service and the pairing page consume.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DeliveryError;

/// Pairing status of the messaging channel.
///
/// While the channel is unpaired the gateway exposes a pairing code that
/// the account holder scans as a QR; once paired, `connected` is true and
/// no pairing code is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingState {
    /// Whether the channel session is connected
    pub connected: bool,

    /// Pairing payload to render as a QR code, when pairing is pending
    pub pairing_code: Option<String>,
}

/// Trait for the messaging-channel client
#[async_trait]
pub trait MessagingServiceTrait: Send + Sync {
    /// Deliver a text message to a phone-addressed chat account
    async fn send_message(&self, phone: &str, text: &str) -> Result<(), DeliveryError>;

    /// Fetch the current pairing state of the channel session
    async fn pairing_state(&self) -> Result<PairingState, DeliveryError>;
}
