//! Chat-channel gateway client.
//!
//! The gateway is the external process holding the paired chat session;
//! this client drives its HTTP API for message delivery and pairing
//! state. Failures are classified into the typed [`DeliveryError`]
//! variants so callers never inspect error strings.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use cv_core::errors::DeliveryError;
use cv_core::services::messaging::{MessagingServiceTrait, PairingState};
use cv_shared::config::ChannelConfig;
use cv_shared::utils::phone::mask_phone;

use crate::InfraError;

/// Client for the chat-channel gateway HTTP API
pub struct ChatGatewayService {
    client: reqwest::Client,
    config: ChannelConfig,
}

/// Message submission payload
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    to: &'a str,
    body: &'a str,
}

/// Structured rejection body returned by the gateway
#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

/// Session state returned by the gateway
#[derive(Debug, Deserialize)]
struct SessionResponse {
    connected: bool,
    #[serde(default)]
    qr: Option<String>,
}

impl ChatGatewayService {
    /// Create a new gateway client from configuration
    pub fn new(config: ChannelConfig) -> Result<Self, InfraError> {
        if config.gateway_url.is_empty() {
            return Err(InfraError::Config("CHANNEL_GATEWAY_URL not set".to_string()));
        }
        if config.api_token.is_empty() {
            return Err(InfraError::Config("CHANNEL_API_TOKEN not set".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfraError::Config(format!("failed to build HTTP client: {}", e)))?;

        info!(
            "Chat gateway client initialized for {}",
            config.gateway_url
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.gateway_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MessagingServiceTrait for ChatGatewayService {
    async fn send_message(&self, phone: &str, text: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.endpoint("/v1/messages"))
            .bearer_auth(&self.config.api_token)
            .json(&SendMessageRequest { to: phone, body: text })
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status.is_success() {
            debug!(
                phone = %mask_phone(phone),
                event = "gateway_message_accepted",
                "Gateway accepted message"
            );
            return Ok(());
        }

        let body = response.json::<GatewayErrorBody>().await.ok();
        let error = classify_rejection(status, body);
        warn!(
            phone = %mask_phone(phone),
            status = %status,
            error = %error,
            event = "gateway_message_rejected",
            "Gateway rejected message"
        );
        Err(error)
    }

    async fn pairing_state(&self) -> Result<PairingState, DeliveryError> {
        let response = self
            .client
            .get(self.endpoint("/v1/session"))
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<GatewayErrorBody>().await.ok();
            return Err(classify_rejection(status, body));
        }

        let session = response
            .json::<SessionResponse>()
            .await
            .map_err(|e| DeliveryError::Failed(format!("malformed session response: {}", e)))?;

        Ok(PairingState {
            connected: session.connected,
            pairing_code: session.qr,
        })
    }
}

/// Classify a transport-level failure.
///
/// Connection refusals and timeouts mean the gateway (and with it the
/// channel session) is unreachable; everything else is a generic failure.
fn classify_transport_error(err: reqwest::Error) -> DeliveryError {
    if err.is_timeout() || err.is_connect() {
        DeliveryError::ChannelDisconnected
    } else {
        DeliveryError::Failed(err.to_string())
    }
}

/// Classify a gateway rejection from its structured error body.
fn classify_rejection(status: StatusCode, body: Option<GatewayErrorBody>) -> DeliveryError {
    match body {
        Some(body) => match body.code.as_str() {
            "invalid_recipient" => DeliveryError::InvalidRecipient,
            "not_paired" | "session_closed" => DeliveryError::ChannelDisconnected,
            _ => DeliveryError::Failed(if body.message.is_empty() {
                body.code
            } else {
                body.message
            }),
        },
        None => DeliveryError::Failed(format!("gateway returned {}", status)),
    }
}
