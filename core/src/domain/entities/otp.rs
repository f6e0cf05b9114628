//! One-time passcode entity for chat-channel verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Lifetime of a verification code (2 minutes)
pub const CODE_TTL_SECONDS: i64 = 120;

/// Maximum code requests per phone inside the trailing window
pub const MAX_SENDS_PER_WINDOW: usize = 3;

/// Length of the trailing rate-limit window (1 hour)
pub const SEND_WINDOW_MINUTES: i64 = 60;

/// A live one-time passcode issued for a phone number.
///
/// At most one record exists per phone at any time; issuing a new code
/// overwrites the previous record. The record is destroyed on successful
/// verification, on expiry detection during a verify attempt, or rolled
/// back when delivery fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Normalized phone number the code was issued for
    pub phone: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Issue a new record for `phone` with a fresh random code expiring
    /// [`CODE_TTL_SECONDS`] after `now`.
    pub fn issue(phone: String, now: DateTime<Utc>) -> Self {
        Self {
            phone,
            code: Self::generate_code(),
            expires_at: now + Duration::seconds(CODE_TTL_SECONDS),
        }
    }

    /// Generate a random 6-digit code, uniform over [100000, 999999].
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Check whether the code has expired as of `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compare a candidate code against this record in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
