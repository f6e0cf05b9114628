//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Standard API response envelope
///
/// Every JSON endpoint answers with this shape; `success` tells the client
/// whether `message` is a confirmation or a failure reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Confirmation or failure reason
    pub message: String,
}

impl StatusResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let ok = serde_json::to_value(StatusResponse::success("delivered")).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["message"], "delivered");

        let err = serde_json::to_value(StatusResponse::error("code expired")).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["message"], "code expired");
    }
}
