//! Controller layer for the hotel admin portal front end.
//!
//! Three surfaces: form validation with a password strength meter, the
//! super administrator creation flow, and the email verification landing
//! page with its resend cooldown. Pages talk to the backend through the
//! [`AdminApi`] trait and to the routing layer through [`Navigator`], so
//! embeddings and tests swap either side out.

pub mod api;
pub mod navigation;
pub mod pages;
pub mod validation;

pub use self::api::{AdminApi, ApiError, HttpAdminApi};
pub use self::navigation::{Destination, Navigator};
pub use self::pages::{CreateAdminPage, PageQuery, VerifyEmailPage};
pub use self::validation::{PasswordStrength, score, validate};

/// Install the default tracing subscriber, filtered by `RUST_LOG`.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
