use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Phone identifier the code is delivered to. Format is not validated
    /// beyond non-empty; the channel rejects numbers it cannot address.
    #[validate(length(min = 1, max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Phone identifier the code was sent to
    #[validate(length(min = 1, max = 32))]
    pub phone: Option<String>,

    /// 6-digit code, accepted as a JSON string or number
    pub code: Option<CodeValue>,
}

/// Verification code as submitted by the client.
///
/// Clients send the code either as `"123456"` or `123456`; both compare
/// as the same digit string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeValue {
    Text(String),
    Number(u64),
}

impl CodeValue {
    /// The submitted code as a trimmed digit string
    pub fn as_digits(&self) -> String {
        match self {
            CodeValue::Text(text) => text.trim().to_string(),
            CodeValue::Number(number) => number.to_string(),
        }
    }
}
