use serde::{Deserialize, Serialize};

/// Wire error codes the backend attaches to error envelopes.
pub mod codes {
    /// Verification token past its validity window.
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    /// Verification token unknown or already consumed.
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    /// An account with the submitted email already exists.
    pub const ACCOUNT_EXISTS: &str = "ACCOUNT_EXISTS";
}

/// JSON envelope every backend response uses, tagged by `status`.
///
/// `{"status":"success","message":...}` or
/// `{"status":"error","code":...,"message":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResponse {
    Success { message: String },
    Error { code: String, message: String },
}

impl ApiResponse {
    pub fn success(message: &str) -> Self {
        Self::Success {
            message: message.to_string(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}
