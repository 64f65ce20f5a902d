pub mod strength;

pub use self::strength::{PasswordStrength, score};

use shared::types::{Field, RegistrationInput, ValidationErrors};

/// Fields the form refuses to submit without.
const REQUIRED_FIELDS: [Field; 6] = [
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
    Field::FirstName,
    Field::LastName,
    Field::EmployeeId,
];

const EMAIL_FORMAT: &str = "Please enter a valid email address";
const PASSWORD_LENGTH: &str = "Password must be at least 8 characters long";
const PASSWORD_COMPOSITION: &str =
    "Password must contain at least one uppercase letter, one lowercase letter, and one number";
const PASSWORD_MISMATCH: &str = "Passwords do not match";
const EMPLOYEE_ID_LENGTH: &str = "Employee ID must be at least 3 characters long";

/// Run every form rule over the record, collecting all failures.
///
/// Rules after the required pass run on the raw values and overwrite the
/// required message for their field, matching the on-screen behavior of the
/// form. Always returns; an empty map means the record is ready to submit.
pub fn validate(input: &RegistrationInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in REQUIRED_FIELDS {
        if input.value(field).trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }

    if !input.email.is_empty() && !email_looks_valid(&input.email) {
        errors.insert(Field::Email, EMAIL_FORMAT);
    }

    if !input.password.is_empty() {
        // Length outranks composition; only one password message at a time.
        if input.password.chars().count() < 8 {
            errors.insert(Field::Password, PASSWORD_LENGTH);
        } else if !has_required_composition(&input.password) {
            errors.insert(Field::Password, PASSWORD_COMPOSITION);
        }
    }

    if input.password != input.confirm_password {
        errors.insert(Field::ConfirmPassword, PASSWORD_MISMATCH);
    }

    if !input.employee_id.is_empty() && input.employee_id.chars().count() < 3 {
        errors.insert(Field::EmployeeId, EMPLOYEE_ID_LENGTH);
    }

    errors
}

/// Whether the address contains `something@something.something` anywhere:
/// a non-whitespace character before the `@`, then a dot inside the
/// non-whitespace run after it, with at least one character on each side.
fn email_looks_valid(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        let run_start = i + 1;
        let mut j = run_start;
        while j < chars.len() && !chars[j].is_whitespace() {
            if chars[j] == '.'
                && j > run_start
                && j + 1 < chars.len()
                && !chars[j + 1].is_whitespace()
            {
                return true;
            }
            j += 1;
        }
    }
    false
}

fn has_required_composition(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
