//! Configuration module
//!
//! Configuration is environment-variable driven. Each sub-module owns one
//! concern:
//! - `environment` - environment detection (development/staging/production)
//! - `server` - HTTP server binding
//! - `channel` - chat-channel gateway connection

pub mod channel;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use channel::ChannelConfig;
pub use environment::Environment;
pub use server::ServerConfig;
