use actix_web::{web, HttpServer};
use log::{info, warn};
use std::sync::Arc;

use cv_api::app::create_app;
use cv_api::routes::otp::AppState;
use cv_core::repositories::{MockUserDirectory, UserDirectoryTrait};
use cv_core::services::otp::OtpService;
use cv_infra::messaging::create_messaging_service;
use cv_infra::store::{InMemoryCodeStore, InMemorySendWindow};
use cv_shared::config::{ChannelConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting ChatVerify API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let channel_config = ChannelConfig::from_env();

    // Resolve the messaging capability once; the process stays up even
    // when the channel is unavailable
    let messaging = create_messaging_service(&channel_config);
    if messaging.is_none() {
        warn!("Messaging channel unavailable: /send will fail until the service is restarted with a working channel");
    }

    let codes = Arc::new(InMemoryCodeStore::new());
    let window = Arc::new(InMemorySendWindow::new());
    let otp_service = Arc::new(OtpService::new(messaging.clone(), codes, window));

    // The production user directory is an external collaborator wired in
    // by the deployment; the in-memory directory keeps a standalone
    // instance functional
    let directory: Arc<dyn UserDirectoryTrait> = Arc::new(MockUserDirectory::new());

    let app_state = web::Data::new(AppState {
        otp_service,
        directory,
        messaging,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await
}
