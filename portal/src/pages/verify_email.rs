//! Controller for the email verification landing page.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use shared::types::{ResendFeedback, VerificationState, VerifyOutcome};

use crate::api::AdminApi;
use crate::navigation::{Destination, Navigator};
use crate::pages::PageQuery;

/// Seconds the resend button stays locked after arming or a resend.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// How long the success screen shows before moving to the login page.
pub const VERIFIED_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// One-second countdown gating the resend button.
///
/// Driven by an external clock: the embedding loop calls [`tick`] once per
/// second. The button unlocks when the count reaches zero and stays
/// unlocked until [`rearm`] winds the cooldown back up.
///
/// [`tick`]: ResendCountdown::tick
/// [`rearm`]: ResendCountdown::rearm
#[derive(Debug, Clone, Copy)]
pub struct ResendCountdown {
    remaining: u32,
    ready: bool,
}

impl ResendCountdown {
    pub fn new() -> Self {
        Self {
            remaining: RESEND_COOLDOWN_SECS,
            ready: false,
        }
    }

    /// Advance one second. Returns true on the tick that unlocks resend.
    pub fn tick(&mut self) -> bool {
        if self.ready {
            return false;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.ready = true;
            return true;
        }
        false
    }

    /// Lock the button again for a full cooldown.
    pub fn rearm(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
        self.ready = false;
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Default for ResendCountdown {
    fn default() -> Self {
        Self::new()
    }
}

enum VerifyPhase {
    Pending,
    Verifying,
    Settled(VerificationState),
}

/// State machine behind the verification landing page.
///
/// Arrives pending; if the URL carried a token the embedding calls
/// [`verify_on_entry`] once to settle into success, expired, or error.
/// Success schedules a delayed redirect to the login page. The resend
/// button is gated by [`ResendCountdown`] and by the settled state.
///
/// [`verify_on_entry`]: VerifyEmailPage::verify_on_entry
pub struct VerifyEmailPage<A, N> {
    api: Arc<A>,
    navigator: Arc<N>,
    email: String,
    token: String,
    phase: VerifyPhase,
    countdown: ResendCountdown,
    resend_loading: bool,
    resend_feedback: Option<ResendFeedback>,
    redirect_task: Option<JoinHandle<()>>,
}

impl<A, N> VerifyEmailPage<A, N>
where
    A: AdminApi,
    N: Navigator + 'static,
{
    pub fn new(
        api: Arc<A>,
        navigator: Arc<N>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            api,
            navigator,
            email: email.into(),
            token: token.into(),
            phase: VerifyPhase::Pending,
            countdown: ResendCountdown::new(),
            resend_loading: false,
            resend_feedback: None,
            redirect_task: None,
        }
    }

    /// Build the page from the URL query, reading `email` and `token`.
    /// Either may be absent; a missing token leaves the page pending.
    pub fn from_query(api: Arc<A>, navigator: Arc<N>, query: &PageQuery) -> Self {
        Self::new(
            api,
            navigator,
            query.get("email").unwrap_or_default(),
            query.get("token").unwrap_or_default(),
        )
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> VerificationState {
        match self.phase {
            VerifyPhase::Pending | VerifyPhase::Verifying => VerificationState::Pending,
            VerifyPhase::Settled(state) => state,
        }
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self.phase, VerifyPhase::Verifying)
    }

    /// Page heading; shows progress wording while the check is in flight.
    pub fn heading(&self) -> &'static str {
        if self.is_verifying() {
            "Verifying Email..."
        } else {
            self.state().title()
        }
    }

    pub fn status_message(&self) -> String {
        self.state().describe(&self.email)
    }

    pub fn resend_feedback(&self) -> Option<ResendFeedback> {
        self.resend_feedback
    }

    pub fn is_resend_loading(&self) -> bool {
        self.resend_loading
    }

    /// Seconds left on the resend cooldown, for the button label.
    pub fn resend_secs_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn can_resend(&self) -> bool {
        self.countdown.ready() && !self.resend_loading && self.state().allows_resend()
    }

    /// Advance the resend cooldown one second. Returns true on the tick
    /// that unlocks the button.
    pub fn tick(&mut self) -> bool {
        self.countdown.tick()
    }

    /// Verify the token from the URL, once.
    ///
    /// Does nothing when no token was supplied or when a verification has
    /// already started or settled, so re-entering the page cannot fire a
    /// second request.
    pub async fn verify_on_entry(&mut self) {
        if !matches!(self.phase, VerifyPhase::Pending) {
            return;
        }
        if self.token.is_empty() {
            debug!("No verification token in the URL, staying pending");
            return;
        }

        self.phase = VerifyPhase::Verifying;
        info!("Verifying email token for: {}", self.email);

        match self.api.verify_email(&self.token).await {
            Ok(VerifyOutcome::Valid) => {
                info!("Email verified: {}", self.email);
                self.phase = VerifyPhase::Settled(VerificationState::Success);
                self.redirect_task = Some(super::schedule_redirect(
                    &self.navigator,
                    Destination::Login { verified: true },
                    VERIFIED_REDIRECT_DELAY,
                ));
            }
            Ok(VerifyOutcome::Expired) => {
                warn!("Verification token expired for: {}", self.email);
                self.phase = VerifyPhase::Settled(VerificationState::Expired);
            }
            Ok(VerifyOutcome::Invalid) => {
                warn!("Verification token rejected for: {}", self.email);
                self.phase = VerifyPhase::Settled(VerificationState::Error);
            }
            Err(error) => {
                warn!("Email verification request failed: {}", error);
                self.phase = VerifyPhase::Settled(VerificationState::Error);
            }
        }
    }

    /// Request a fresh verification email.
    ///
    /// No-op unless the cooldown has elapsed and the current state still
    /// offers the resend button. A successful resend rearms the cooldown;
    /// a failed one leaves the button unlocked for another try.
    pub async fn resend(&mut self) {
        if !self.can_resend() {
            return;
        }

        self.resend_loading = true;
        self.resend_feedback = None;
        info!("Resending verification email to: {}", self.email);

        match self.api.resend_verification(&self.email).await {
            Ok(()) => {
                self.resend_feedback = Some(ResendFeedback::Sent);
                self.countdown.rearm();
            }
            Err(error) => {
                warn!("Resend verification failed: {}", error);
                self.resend_feedback = Some(ResendFeedback::Failed);
            }
        }

        self.resend_loading = false;
    }
}

impl<A, N> Drop for VerifyEmailPage<A, N> {
    fn drop(&mut self) {
        if let Some(task) = self.redirect_task.take() {
            task.abort();
        }
    }
}
