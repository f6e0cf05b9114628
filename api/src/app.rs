//! Application factory.
//!
//! Builds the Actix-web application with middleware and routes around a
//! shared [`AppState`].

use actix_web::{middleware::Logger, web, App, HttpResponse};

use cv_shared::types::StatusResponse;

use crate::middleware::cors::create_cors;
use crate::routes::otp::{qr_page, send_code, verify_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP endpoints
        .route("/send", web::post().to(send_code))
        .route("/verify", web::post().to(verify_code))
        .route("/qr", web::get().to(qr_page))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "chat-verify-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(StatusResponse::error(
        "The requested resource was not found",
    ))
}
