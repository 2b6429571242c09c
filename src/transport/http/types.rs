use crate::app::driver_service::DriverService;
use crate::domain::auth::BasicAuthenticator;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub drivers: Arc<DriverService>,
    pub authenticator: Arc<BasicAuthenticator>,
}

impl AppState {
    pub fn new(drivers: DriverService, authenticator: BasicAuthenticator) -> Self {
        Self {
            drivers: Arc::new(drivers),
            authenticator: Arc::new(authenticator),
        }
    }
}

/// Envelope for error responses.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn error_with_data(message: impl Into<String>, data: JsonValue) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DriverIdQuery {
    /// Id of the driver.
    pub driver_id: i64,
}

#[derive(Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RandomDriversQuery {
    /// How many drivers to generate (default 10).
    #[serde(default)]
    pub drivers_count_to_be_inserted: Option<i64>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DriverFullNameQuery {
    /// First and last name separated by whitespace, e.g. `Oliver Johnson`.
    #[serde(default)]
    pub driver_full_name: Option<String>,
}
