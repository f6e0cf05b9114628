//! OTP lifecycle service implementation.

use std::sync::Arc;

use cv_shared::utils::phone::mask_phone;

use crate::domain::entities::otp::{OtpRecord, MAX_SENDS_PER_WINDOW};
use crate::errors::{DeliveryError, DomainResult, OtpError};
use crate::services::messaging::MessagingServiceTrait;

use super::clock::{Clock, SystemClock};
use super::traits::{CodeStoreTrait, SendWindowTrait};

/// Service owning the full lifecycle of one-time passcodes.
///
/// The messaging capability is resolved once at startup and may be
/// absent; code requests fail with a channel-disconnected error until it
/// becomes available on the next start. Stores and clock are injected so
/// tests control both state and time.
pub struct OtpService {
    /// Messaging channel, when startup initialization succeeded
    messaging: Option<Arc<dyn MessagingServiceTrait>>,
    /// Live OTP records keyed by normalized phone
    codes: Arc<dyn CodeStoreTrait>,
    /// Send-attempt window keyed by normalized phone
    window: Arc<dyn SendWindowTrait>,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl OtpService {
    /// Create a service using the wall clock
    pub fn new(
        messaging: Option<Arc<dyn MessagingServiceTrait>>,
        codes: Arc<dyn CodeStoreTrait>,
        window: Arc<dyn SendWindowTrait>,
    ) -> Self {
        Self::with_clock(messaging, codes, window, Arc::new(SystemClock))
    }

    /// Create a service with an explicit time source
    pub fn with_clock(
        messaging: Option<Arc<dyn MessagingServiceTrait>>,
        codes: Arc<dyn CodeStoreTrait>,
        window: Arc<dyn SendWindowTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            messaging,
            codes,
            window,
            clock,
        }
    }

    /// Issue a verification code and deliver it over the chat channel.
    ///
    /// Rate limiting happens before generation: a phone with
    /// [`MAX_SENDS_PER_WINDOW`] attempts inside the trailing window is
    /// rejected without a new code or a recorded attempt. A successfully
    /// generated code counts against the window even when delivery later
    /// fails; the stored record, however, is rolled back on failure so an
    /// undelivered code can never be verified.
    pub async fn request_code(&self, phone: &str) -> DomainResult<()> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(OtpError::MissingInput.into());
        }

        let now = self.clock.now();
        let attempts = self.window.recent_attempts(phone, now);
        if attempts >= MAX_SENDS_PER_WINDOW {
            tracing::warn!(
                phone = %mask_phone(phone),
                attempts = attempts,
                event = "send_rate_limited",
                "Code request rejected by the send window"
            );
            return Err(OtpError::RateLimited.into());
        }

        let record = OtpRecord::issue(phone.to_string(), now);
        let code = record.code.clone();
        self.codes.put(record);
        self.window.record_attempt(phone, now);

        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_generated",
            "Generated verification code"
        );

        let messaging = match self.messaging.as_ref() {
            Some(messaging) => messaging,
            None => {
                // Rollback so the undeliverable code cannot be verified
                self.codes.remove(phone);
                tracing::warn!(
                    phone = %mask_phone(phone),
                    event = "channel_unavailable",
                    "Messaging channel was not initialized"
                );
                return Err(OtpError::Delivery(DeliveryError::ChannelDisconnected).into());
            }
        };

        if let Err(err) = messaging.send_message(phone, &delivery_text(&code)).await {
            self.codes.remove(phone);
            tracing::error!(
                phone = %mask_phone(phone),
                error = %err,
                event = "otp_delivery_failed",
                "Failed to deliver verification code"
            );
            return Err(OtpError::Delivery(err).into());
        }

        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_delivered",
            "Verification code delivered"
        );
        Ok(())
    }

    /// Verify a code for a phone number.
    ///
    /// The record is consumed on success and on detected expiry; a
    /// mismatch leaves it in place so the user may retry until expiry.
    /// This method never suspends.
    pub fn verify_code(&self, phone: &str, code: &str) -> DomainResult<()> {
        let phone = phone.trim();
        let code = code.trim();
        if phone.is_empty() || code.is_empty() {
            return Err(OtpError::MissingInput.into());
        }

        let record = match self.codes.get(phone) {
            Some(record) => record,
            None => {
                tracing::warn!(
                    phone = %mask_phone(phone),
                    event = "otp_not_found",
                    "Verify attempt without an active code"
                );
                return Err(OtpError::NotFound.into());
            }
        };

        if record.is_expired(self.clock.now()) {
            self.codes.remove(phone);
            tracing::warn!(
                phone = %mask_phone(phone),
                event = "otp_expired",
                "Verification code expired"
            );
            return Err(OtpError::Expired.into());
        }

        if !record.matches(code) {
            tracing::warn!(
                phone = %mask_phone(phone),
                event = "otp_mismatch",
                "Verification code mismatch"
            );
            return Err(OtpError::Mismatch.into());
        }

        self.codes.remove(phone);
        tracing::info!(
            phone = %mask_phone(phone),
            event = "otp_verified",
            "Verification code accepted"
        );
        Ok(())
    }
}

/// Fixed delivery template embedding the code and the expiry notice
fn delivery_text(code: &str) -> String {
    format!(
        "Your ChatVerify code is {}. It expires in 2 minutes.",
        code
    )
}
