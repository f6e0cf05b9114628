//! # ChatVerify Core
//!
//! Core business logic and domain layer for the ChatVerify backend.
//! This crate contains the OTP lifecycle service, domain entities,
//! collaborator interfaces, and error types that form the foundation of
//! the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::otp::{
    OtpRecord, CODE_LENGTH, CODE_TTL_SECONDS, MAX_SENDS_PER_WINDOW, SEND_WINDOW_MINUTES,
};
pub use domain::entities::user::DirectoryUser;
pub use errors::{DeliveryError, DomainError, DomainResult, OtpError};
pub use repositories::{MockUserDirectory, UserDirectoryTrait};
pub use services::{
    Clock, CodeStoreTrait, MessagingServiceTrait, OtpService, PairingState, SendWindowTrait,
    SystemClock,
};
