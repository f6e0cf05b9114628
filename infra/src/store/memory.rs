//! Mutex-guarded map implementations of the core storage traits.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use cv_core::domain::entities::otp::{OtpRecord, SEND_WINDOW_MINUTES};
use cv_core::services::otp::traits::{CodeStoreTrait, SendWindowTrait};

/// In-memory store for live OTP records, keyed by normalized phone.
///
/// Entries are only ever removed through the lifecycle (verify, expiry
/// detection, delivery rollback); there is no background sweep.
#[derive(Default)]
pub struct InMemoryCodeStore {
    codes: Mutex<HashMap<String, OtpRecord>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records (test and diagnostics helper)
    pub fn len(&self) -> usize {
        self.codes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CodeStoreTrait for InMemoryCodeStore {
    fn get(&self, phone: &str) -> Option<OtpRecord> {
        self.codes.lock().unwrap().get(phone).cloned()
    }

    fn put(&self, record: OtpRecord) {
        self.codes
            .lock()
            .unwrap()
            .insert(record.phone.clone(), record);
    }

    fn remove(&self, phone: &str) {
        self.codes.lock().unwrap().remove(phone);
    }
}

/// Sliding-window tracker for send attempts.
///
/// Each key holds the attempt instants inside the trailing
/// [`SEND_WINDOW_MINUTES`] window; older instants are purged lazily on
/// each check, the same purge-then-count-then-add sequence the service
/// relies on. Keys whose windows drain empty are dropped to keep the map
/// from growing with one-off phones.
#[derive(Default)]
pub struct InMemorySendWindow {
    attempts: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl InMemorySendWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked phones (test and diagnostics helper)
    pub fn tracked_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

impl SendWindowTrait for InMemorySendWindow {
    fn recent_attempts(&self, phone: &str, now: DateTime<Utc>) -> usize {
        let mut attempts = self.attempts.lock().unwrap();
        let cutoff = now - Duration::minutes(SEND_WINDOW_MINUTES);

        let count = match attempts.get_mut(phone) {
            Some(stamps) => {
                stamps.retain(|at| *at > cutoff);
                stamps.len()
            }
            None => 0,
        };

        if count == 0 {
            attempts.remove(phone);
        }
        count
    }

    fn record_attempt(&self, phone: &str, at: DateTime<Utc>) {
        self.attempts
            .lock()
            .unwrap()
            .entry(phone.to_string())
            .or_default()
            .push(at);
    }
}
