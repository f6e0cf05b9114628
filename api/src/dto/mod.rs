pub mod otp;

pub use otp::{CodeValue, SendCodeRequest, VerifyCodeRequest};
