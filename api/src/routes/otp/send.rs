//! Handler for `POST /send`.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use cv_core::errors::{DomainError, OtpError};
use cv_shared::types::StatusResponse;
use cv_shared::utils::phone::mask_phone;

use crate::dto::SendCodeRequest;
use crate::handlers::error_response;

use super::AppState;

/// Request a verification code for a phone number.
///
/// # Request Body
///
/// ```json
/// { "phone": "0912345678" }
/// ```
///
/// # Responses
/// - `200` `{"success":true,"message":"delivered"}`
/// - `400` missing/invalid phone, or delivery failed
/// - `429` too many requests for this phone in the trailing hour
pub async fn send_code(
    state: web::Data<AppState>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();

    let phone = match request.phone.as_deref().map(str::trim) {
        Some(phone) if !phone.is_empty() => phone.to_string(),
        _ => {
            log::warn!("[{}] send_code request without a phone", request_id);
            return error_response(&OtpError::MissingInput.into());
        }
    };

    if request.0.validate().is_err() {
        log::warn!(
            "[{}] send_code request failed validation for {}",
            request_id,
            mask_phone(&phone)
        );
        return error_response(&DomainError::Validation {
            message: "invalid phone".to_string(),
        });
    }

    log::info!(
        "[{}] Sending verification code to {}",
        request_id,
        mask_phone(&phone)
    );

    match state.otp_service.request_code(&phone).await {
        Ok(()) => HttpResponse::Ok().json(StatusResponse::success("delivered")),
        Err(error) => {
            log::error!(
                "[{}] Failed to send verification code to {}: {}",
                request_id,
                mask_phone(&phone),
                error
            );
            error_response(&error)
        }
    }
}
