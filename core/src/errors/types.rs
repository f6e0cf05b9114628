//! Error type definitions for the OTP lifecycle and message delivery.
//!
//! User-facing message text lives on the variants; the presentation layer
//! maps each variant to an HTTP status.

use thiserror::Error;

/// OTP lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("phone or code is missing")]
    MissingInput,

    #[error("too many code requests for this number, try again later")]
    RateLimited,

    #[error("no code was sent, or it already expired or was used")]
    NotFound,

    #[error("verification code expired, request a new one")]
    Expired,

    #[error("verification code does not match")]
    Mismatch,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Typed delivery failures reported by the messaging collaborator.
///
/// The messaging implementation classifies its transport and gateway
/// failures into these variants so callers never inspect error strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("messaging channel disconnected, pair the device again")]
    ChannelDisconnected,

    #[error("invalid phone number format")]
    InvalidRecipient,

    #[error("message delivery failed: {0}")]
    Failed(String),
}
