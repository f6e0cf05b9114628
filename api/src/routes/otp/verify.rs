//! Handler for `POST /verify`.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use cv_core::errors::{DomainError, OtpError};
use cv_shared::types::StatusResponse;
use cv_shared::utils::phone::{mask_phone, phone_variants};

use crate::dto::VerifyCodeRequest;
use crate::handlers::error_response;

use super::AppState;

/// Verify a code and mark the matching directory record as
/// phone-verified.
///
/// The directory update prefers the authenticated user when the request
/// carries a resolvable bearer token; otherwise it falls back to a
/// best-effort lookup over the phone's alternative representations.
///
/// # Request Body
///
/// ```json
/// { "phone": "0912345678", "code": "123456" }
/// ```
///
/// `code` may be a JSON string or number.
///
/// # Responses
/// - `200` `{"success":true,"message":"verified"}`
/// - `400` missing input, no active code, expired, or mismatch
/// - `500` directory failure while recording the verification
pub async fn verify_code(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();

    let (phone, code) = match (request.phone.as_deref().map(str::trim), &request.code) {
        (Some(phone), Some(code)) if !phone.is_empty() => (phone.to_string(), code.as_digits()),
        _ => {
            log::warn!("[{}] verify_code request missing phone or code", request_id);
            return error_response(&OtpError::MissingInput.into());
        }
    };

    if request.0.validate().is_err() {
        log::warn!(
            "[{}] verify_code request failed validation for {}",
            request_id,
            mask_phone(&phone)
        );
        return error_response(&DomainError::Validation {
            message: "invalid phone".to_string(),
        });
    }

    if let Err(error) = state.otp_service.verify_code(&phone, &code) {
        log::warn!(
            "[{}] Verification failed for {}: {}",
            request_id,
            mask_phone(&phone),
            error
        );
        return error_response(&error);
    }

    match update_directory(&state, bearer_token(&req).as_deref(), &phone).await {
        Ok(true) => {}
        Ok(false) => {
            // The code was valid; a missing directory record is the
            // caller's problem to reconcile
            log::warn!(
                "[{}] No directory record matched {}",
                request_id,
                mask_phone(&phone)
            );
        }
        Err(error) => {
            log::error!(
                "[{}] Directory update failed for {}: {}",
                request_id,
                mask_phone(&phone),
                error
            );
            return error_response(&DomainError::Internal {
                message: error.to_string(),
            });
        }
    }

    log::info!("[{}] Phone {} verified", request_id, mask_phone(&phone));
    HttpResponse::Ok().json(StatusResponse::success("verified"))
}

/// Flip the phone-verified flag on the matching directory record.
///
/// Returns whether any record was updated.
async fn update_directory(
    state: &AppState,
    bearer: Option<&str>,
    phone: &str,
) -> Result<bool, DomainError> {
    if let Some(token) = bearer {
        if let Some(user) = state.directory.find_by_auth_token(token).await? {
            state.directory.mark_phone_verified(user.id).await?;
            return Ok(true);
        }
    }

    let variants = phone_variants(phone);
    Ok(state
        .directory
        .find_and_mark_phone_verified(&variants)
        .await?
        .is_some())
}

/// Extract the raw bearer value from the Authorization header
fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}
