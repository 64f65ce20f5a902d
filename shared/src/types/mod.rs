pub mod api;
pub mod portal_config;
pub mod register;
pub mod verification;

pub use self::api::ApiResponse;
pub use self::register::{CreateAdminRequest, Field, RegistrationInput, ValidationErrors};
pub use self::verification::{ResendFeedback, VerificationState, VerifyOutcome};
