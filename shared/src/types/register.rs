use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Form record
// ---------------------------------------------------------------------------

/// Department choices offered by the create-admin form, first entry is the
/// default.
pub const DEPARTMENTS: [&str; 5] = [
    "Hotel Management",
    "IT Department",
    "Operations",
    "Finance",
    "Human Resources",
];

pub const DEFAULT_DEPARTMENT: &str = "Hotel Management";
pub const DEFAULT_POSITION: &str = "Super Administrator";

/// Everything the create-admin form collects. The confirmation password is
/// checked client-side and never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    /// Optional; empty means not provided.
    pub phone: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
}

impl Default for RegistrationInput {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            employee_id: String::new(),
            department: DEFAULT_DEPARTMENT.to_string(),
            position: DEFAULT_POSITION.to_string(),
        }
    }
}

impl RegistrationInput {
    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::EmployeeId => &self.employee_id,
            Field::Department => &self.department,
            Field::Position => &self.position,
        }
    }

    /// Replace the value of a field.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Phone => self.phone = value,
            Field::EmployeeId => self.employee_id = value,
            Field::Department => self.department = value,
            Field::Position => self.position = value,
        }
    }

    /// Build the wire payload for the account-creation call: confirmation
    /// password dropped, text fields trimmed, blank phone omitted. The
    /// password itself is never trimmed.
    pub fn to_request(&self) -> CreateAdminRequest {
        let phone = self.phone.trim();
        CreateAdminRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            employee_id: self.employee_id.trim().to_string(),
            department: self.department.trim().to_string(),
            position: self.position.trim().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Closed set of form fields, used to key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Phone,
    EmployeeId,
    Department,
    Position,
}

impl Field {
    /// Wire name, camelCase as the backend and the query layer spell it.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::EmployeeId => "employeeId",
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    /// Form label derived from the wire name: camelCase split into words,
    /// first letter capitalized (`confirmPassword` → `Confirm password`).
    pub fn label(&self) -> String {
        humanize(self.name())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn humanize(name: &str) -> String {
    let mut words = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            words.push(' ');
            words.push(c.to_ascii_lowercase());
        } else {
            words.push(c);
        }
    }
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Per-field validation messages. A missing key means the field is valid;
/// an empty map means the whole record is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the message for a field.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop a field's message, if any. Called when the user edits the field.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flagged fields and their messages, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Wire payload
// ---------------------------------------------------------------------------

/// Body for `POST /superadmin/create_admin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub employee_id: String,
    pub department: String,
    pub position: String,
}
