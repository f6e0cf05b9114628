//! OTP lifecycle service: generation, storage, expiry, rate limiting,
//! and verification of one-time passcodes.

pub mod clock;
pub mod service;
pub mod traits;

pub use clock::{Clock, SystemClock};
pub use service::OtpService;
pub use traits::{CodeStoreTrait, SendWindowTrait};

#[cfg(test)]
mod tests;
