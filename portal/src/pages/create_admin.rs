//! Controller for the super administrator creation form.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use shared::types::{Field, RegistrationInput, ValidationErrors};

use crate::api::AdminApi;
use crate::navigation::{Destination, Navigator};
use crate::validation::{self, PasswordStrength};

pub const SUCCESS_MESSAGE: &str = "Super Administrator created successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Failed to create super administrator. Please try again.";

/// How long the success banner shows before moving to the dashboard.
pub const CREATED_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// State machine behind the creation form.
///
/// Holds the draft record, the per-field validation errors, and the
/// submission status. Submission only reaches the API once the form
/// validates clean; on success the form resets and a delayed redirect to
/// the admin dashboard is scheduled.
pub struct CreateAdminPage<A, N> {
    api: Arc<A>,
    navigator: Arc<N>,
    input: RegistrationInput,
    errors: ValidationErrors,
    submit_error: Option<&'static str>,
    success_message: Option<&'static str>,
    is_loading: bool,
    redirect_task: Option<JoinHandle<()>>,
}

impl<A, N> CreateAdminPage<A, N>
where
    A: AdminApi,
    N: Navigator + 'static,
{
    pub fn new(api: Arc<A>, navigator: Arc<N>) -> Self {
        Self {
            api,
            navigator,
            input: RegistrationInput::default(),
            errors: ValidationErrors::new(),
            submit_error: None,
            success_message: None,
            is_loading: false,
            redirect_task: None,
        }
    }

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&'static str> {
        self.submit_error
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.success_message
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Meter reading for the password currently in the form.
    pub fn password_strength(&self) -> PasswordStrength {
        validation::score(&self.input.password)
    }

    /// Record an edit to one field, clearing that field's error so the
    /// user is not nagged while retyping.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set_value(field, value);
        self.errors.clear(field);
    }

    /// Validate the form and, if clean, submit it to the API.
    ///
    /// Re-running validation replaces all previous errors, including a
    /// stale submission error. No-op while a submission is in flight.
    pub async fn submit(&mut self) {
        if self.is_loading {
            return;
        }

        self.submit_error = None;
        self.errors = validation::validate(&self.input);
        if !self.errors.is_empty() {
            warn!("Admin creation blocked by {} invalid field(s)", self.errors.len());
            return;
        }

        self.is_loading = true;
        self.success_message = None;

        let request = self.input.to_request();
        info!("Attempting super administrator creation for: {}", request.email);

        match self.api.create_super_admin(&request).await {
            Ok(()) => {
                info!("Super administrator created: {}", request.email);
                self.success_message = Some(SUCCESS_MESSAGE);
                self.input = RegistrationInput::default();
                let task = super::schedule_redirect(
                    &self.navigator,
                    Destination::AdminDashboard,
                    CREATED_REDIRECT_DELAY,
                );
                if let Some(stale) = self.redirect_task.replace(task) {
                    stale.abort();
                }
            }
            Err(error) => {
                warn!("Super administrator creation failed: {}", error);
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE);
            }
        }

        self.is_loading = false;
    }
}

impl<A, N> Drop for CreateAdminPage<A, N> {
    fn drop(&mut self) {
        if let Some(task) = self.redirect_task.take() {
            task.abort();
        }
    }
}
