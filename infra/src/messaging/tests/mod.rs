//! Tests for the messaging implementations.

use cv_core::errors::DeliveryError;
use cv_core::services::messaging::MessagingServiceTrait;
use cv_shared::config::ChannelConfig;

use crate::messaging::{create_messaging_service, ChatGatewayService, MockMessagingService};

#[tokio::test]
async fn test_mock_records_messages() {
    let service = MockMessagingService::new();

    service
        .send_message("0912345678", "Your ChatVerify code is 123456.")
        .await
        .unwrap();

    assert_eq!(service.message_count(), 1);
    let (to, text) = service.last_message().unwrap();
    assert_eq!(to, "0912345678");
    assert!(text.contains("123456"));
}

#[tokio::test]
async fn test_mock_failure_simulation() {
    let service = MockMessagingService::failing();

    let err = service
        .send_message("0912345678", "irrelevant")
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Failed(_)));
    assert_eq!(service.message_count(), 0);
    assert!(service.last_message().is_none());
}

#[tokio::test]
async fn test_mock_reports_paired_channel() {
    let service = MockMessagingService::new();
    let state = service.pairing_state().await.unwrap();

    assert!(state.connected);
    assert!(state.pairing_code.is_none());
}

#[test]
fn test_gateway_requires_url_and_token() {
    let mut config = ChannelConfig::default();
    config.provider = "gateway".to_string();
    config.gateway_url = String::new();
    assert!(ChatGatewayService::new(config.clone()).is_err());

    config.gateway_url = "http://127.0.0.1:3001".to_string();
    config.api_token = String::new();
    assert!(ChatGatewayService::new(config.clone()).is_err());

    config.api_token = "secret".to_string();
    assert!(ChatGatewayService::new(config).is_ok());
}

#[test]
fn test_factory_provider_selection() {
    let mut config = ChannelConfig::default();

    config.provider = "mock".to_string();
    assert!(create_messaging_service(&config).is_some());

    // Unknown providers fall back to the mock
    config.provider = "carrier-pigeon".to_string();
    assert!(create_messaging_service(&config).is_some());

    // A misconfigured gateway resolves to an absent capability
    config.provider = "gateway".to_string();
    config.api_token = String::new();
    assert!(create_messaging_service(&config).is_none());
}

#[tokio::test]
async fn test_unreachable_gateway_classifies_as_disconnected() {
    let config = ChannelConfig {
        provider: "gateway".to_string(),
        // Reserved TEST-NET address, nothing listens here
        gateway_url: "http://192.0.2.1:9".to_string(),
        api_token: "secret".to_string(),
        request_timeout_secs: 1,
    };
    let service = ChatGatewayService::new(config).unwrap();

    let err = service
        .send_message("0912345678", "irrelevant")
        .await
        .unwrap_err();

    assert_eq!(err, DeliveryError::ChannelDisconnected);
}
