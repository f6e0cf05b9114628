//! Mapping from domain errors to HTTP responses.
//!
//! Every failure surfaces as a `{success: false, message}` body. Rate
//! limiting answers 429, all other lifecycle failures 400, and 500 is
//! reserved for unexpected internal errors, which get a generic message
//! instead of the internal detail.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use cv_core::errors::{DomainError, OtpError};
use cv_shared::types::StatusResponse;

/// Build the HTTP response for a domain error
pub fn error_response(error: &DomainError) -> HttpResponse {
    HttpResponse::build(status_for(error)).json(StatusResponse::error(user_message(error)))
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Otp(OtpError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
        DomainError::Otp(_) => StatusCode::BAD_REQUEST,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::NotFound { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn user_message(error: &DomainError) -> String {
    match error {
        DomainError::Otp(err) => err.to_string(),
        DomainError::Validation { message } => message.clone(),
        DomainError::Unauthorized => "unauthorized".to_string(),
        // Internal details stay in the logs
        DomainError::NotFound { .. } | DomainError::Internal { .. } => {
            "internal server error".to_string()
        }
    }
}
