//! Shape checks for incoming driver payloads.

use super::model::{Driver, DriverPayload, FieldError};
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_NAME_LENGTH: usize = 20;

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(
            r"^\+?[0-9 ().\-]*[0-9][0-9 ().\-]*(\s*(x|ext\.?|extension)\s*[0-9]+)?$",
        )
        .expect("phone regex is valid")
    })
}

/// Exactly one `@`, neither leading nor trailing.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(&phone.trim().to_lowercase())
}

fn required(
    value: Option<String>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.push(FieldError::new(field, format!("{} is required.", label)));
            None
        }
    }
}

fn check_name(value: Option<String>, field: &str, label: &str, errors: &mut Vec<FieldError>) -> String {
    let Some(v) = required(value, field, label, errors) else {
        return String::new();
    };
    if v.chars().count() > MAX_NAME_LENGTH {
        errors.push(FieldError::new(
            field,
            format!("{} length can't be more than {} characters", label, MAX_NAME_LENGTH),
        ));
    }
    v
}

impl DriverPayload {
    /// Checks every field and returns the driver, or all field errors found.
    pub fn validate(self) -> Result<Driver, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = check_name(self.first_name, "firstName", "First Name", &mut errors);
        let last_name = check_name(self.last_name, "lastName", "Last Name", &mut errors);

        let email = required(self.email, "email", "Email", &mut errors).unwrap_or_default();
        if !email.is_empty() && !is_valid_email(&email) {
            errors.push(FieldError::new("email", "Email is invalid"));
        }

        let phone_number =
            required(self.phone_number, "phoneNumber", "Phone Number", &mut errors).unwrap_or_default();
        if !phone_number.is_empty() && !is_valid_phone(&phone_number) {
            errors.push(FieldError::new("phoneNumber", "Phone Number is invalid"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Driver {
            id: self.id,
            first_name,
            last_name,
            email,
            phone_number,
        })
    }
}
