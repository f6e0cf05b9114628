//! Storage traits consumed by the OTP lifecycle service.
//!
//! Both traits are synchronous: every operation is a single
//! check-and-mutate over one key, so implementations guard each call with
//! a lock held only for that step and nothing ever suspends mid-mutation.

use chrono::{DateTime, Utc};

use crate::domain::entities::otp::OtpRecord;

/// Keyed storage for live OTP records
pub trait CodeStoreTrait: Send + Sync {
    /// Fetch the live record for a phone, if any
    fn get(&self, phone: &str) -> Option<OtpRecord>;

    /// Store a record, overwriting any previous record for the same phone
    fn put(&self, record: OtpRecord);

    /// Delete the record for a phone, if any
    fn remove(&self, phone: &str);
}

/// Sliding-window tracker for send attempts
pub trait SendWindowTrait: Send + Sync {
    /// Count the attempts recorded for `phone` inside the trailing
    /// window ending at `now`, purging older entries as a side effect.
    fn recent_attempts(&self, phone: &str, now: DateTime<Utc>) -> usize;

    /// Record a send attempt for `phone` at instant `at`
    fn record_attempt(&self, phone: &str, at: DateTime<Utc>);
}
