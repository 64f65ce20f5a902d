use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use shared::types::{CreateAdminRequest, VerifyOutcome};

pub mod http;

pub use self::http::HttpAdminApi;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures an [`AdminApi`] implementation can surface. The pages fold all
/// of these into their user-facing taxonomy (generic submit error, error
/// verification state, resend failure message).
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("invalid api url: {0}")]
    InvalidUrl(String),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("failed to reach the admin api: {0}")]
    Transport(String),

    #[error("the admin api did not answer within {0:?}")]
    Timeout(Duration),

    #[error("the admin api returned an unexpected response (status {status})")]
    Unexpected { status: u16 },

    #[error("{message}")]
    Rejected { code: String, message: String },
}

// ---------------------------------------------------------------------------
// Collaborator seam
// ---------------------------------------------------------------------------

/// Backend operations the pages depend on.
///
/// Pages hold an implementation behind `Arc` so the tests can swap
/// [`HttpAdminApi`] for deterministic fakes.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Create a super administrator account.
    async fn create_super_admin(&self, request: &CreateAdminRequest) -> Result<(), ApiError>;

    /// Check a verification token.
    async fn verify_email(&self, token: &str) -> Result<VerifyOutcome, ApiError>;

    /// Send a fresh verification mail for `email`.
    async fn resend_verification(&self, email: &str) -> Result<(), ApiError>;
}
