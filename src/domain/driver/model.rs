use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted driver row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Assigned by the store on insert; 0 until then.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Request body for create/update.
///
/// Every field is optional at the JSON level so that a missing field is reported as a
/// field-level validation message rather than a body parse error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverPayload {
    #[serde(default)]
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Read-only view with the letters of each name part sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetizedDriver {
    pub id: i64,
    pub alphabetized_full_name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<&Driver> for AlphabetizedDriver {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            alphabetized_full_name: super::alphabetize_full_name(
                &driver.first_name,
                &driver.last_name,
            ),
            email: driver.email.clone(),
            phone_number: driver.phone_number.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
