//! Chat-channel gateway configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the chat-channel gateway connection.
///
/// The gateway is the external process that holds the paired messaging
/// session; this service only talks to its HTTP API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Messaging provider: "gateway" for the real channel, "mock" for
    /// console output in development
    pub provider: String,

    /// Base URL of the gateway HTTP API
    pub gateway_url: String,

    /// Bearer token authenticating this service against the gateway
    pub api_token: String,

    /// Timeout for gateway requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            gateway_url: String::from("http://127.0.0.1:3001"),
            api_token: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl ChannelConfig {
    /// Load configuration from `CHANNEL_*` environment variables, falling
    /// back to the mock provider when unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            provider: env::var("CHANNEL_PROVIDER").unwrap_or(defaults.provider),
            gateway_url: env::var("CHANNEL_GATEWAY_URL").unwrap_or(defaults.gateway_url),
            api_token: env::var("CHANNEL_API_TOKEN").unwrap_or(defaults.api_token),
            request_timeout_secs: env::var("CHANNEL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
