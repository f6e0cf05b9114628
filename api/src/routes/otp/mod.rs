//! OTP endpoint handlers.

use std::sync::Arc;

use cv_core::repositories::UserDirectoryTrait;
use cv_core::services::messaging::MessagingServiceTrait;
use cv_core::services::otp::OtpService;

pub mod qr;
pub mod send;
pub mod verify;

pub use qr::qr_page;
pub use send::send_code;
pub use verify::verify_code;

/// Application state shared across handlers
pub struct AppState {
    /// OTP lifecycle service
    pub otp_service: Arc<OtpService>,

    /// User directory collaborator
    pub directory: Arc<dyn UserDirectoryTrait>,

    /// Messaging channel, when startup initialization succeeded.
    /// The pairing page reads state from it directly.
    pub messaging: Option<Arc<dyn MessagingServiceTrait>>,
}
