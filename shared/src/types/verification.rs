use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Verification state
// ---------------------------------------------------------------------------

/// Resolved display state of the email-verification page.
///
/// Transitions are one-way per page lifetime: once a token check settles in
/// `Success`, `Error` or `Expired` the page never returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    Pending,
    Success,
    Error,
    Expired,
}

impl VerificationState {
    /// Heading shown for the state.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Pending => "Check Your Email",
            Self::Success => "Email Verified Successfully!",
            Self::Error => "Verification Failed",
            Self::Expired => "Verification Link Expired",
        }
    }

    /// Body copy shown under the heading. `Pending` names the address the
    /// verification mail went to.
    pub fn describe(&self, email: &str) -> String {
        match self {
            Self::Pending => format!(
                "We've sent a verification email to {email}. Please check your inbox and click the verification link to activate your account."
            ),
            Self::Success => {
                "Your email has been verified. You can now log in to your account. Redirecting to login page...".to_string()
            }
            Self::Error => {
                "The verification link is invalid or has already been used. Please request a new verification email.".to_string()
            }
            Self::Expired => {
                "The verification link has expired. Please request a new verification email to complete your registration.".to_string()
            }
        }
    }

    /// Whether the resend affordance is shown at all for this state.
    pub fn allows_resend(&self) -> bool {
        matches!(self, Self::Pending | Self::Expired | Self::Error)
    }
}

impl fmt::Display for VerificationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
            Self::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Token check outcome
// ---------------------------------------------------------------------------

/// What the verification endpoint said about a token. The page collapses
/// `Invalid` and every transport-level failure into
/// [`VerificationState::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Valid,
    Expired,
    Invalid,
}

// ---------------------------------------------------------------------------
// Resend feedback
// ---------------------------------------------------------------------------

/// Inline message surfaced after a resend attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendFeedback {
    Sent,
    Failed,
}

impl ResendFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Sent => "Verification email sent successfully!",
            Self::Failed => "Failed to send verification email. Please try again.",
        }
    }
}
