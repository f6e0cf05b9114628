//! Domain entities.

pub mod otp;
pub mod user;

pub use otp::{OtpRecord, CODE_LENGTH, CODE_TTL_SECONDS, MAX_SENDS_PER_WINDOW, SEND_WINDOW_MINUTES};
pub use user::DirectoryUser;
