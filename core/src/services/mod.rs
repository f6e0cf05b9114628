//! Business services.

pub mod messaging;
pub mod otp;

pub use messaging::{MessagingServiceTrait, PairingState};
pub use otp::{Clock, CodeStoreTrait, OtpService, SendWindowTrait, SystemClock};
