use crate::domain::driver::AlphabetizedDriver;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, AppState, DriverFullNameQuery};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/Driver/GetAllDriversAlphabetized",
    responses(
        (status = 200, description = "All drivers with alphabetized names", body = [AlphabetizedDriver]),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn get_all_drivers_alphabetized_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AlphabetizedDriver>>, ApiError> {
    Ok(Json(state.drivers.get_all_drivers_alphabetized().await?))
}

#[utoipa::path(
    get,
    path = "/api/Driver/GetAlphabetizedDriverName",
    params(DriverFullNameQuery),
    responses(
        (status = 200, description = "Alphabetized name", body = String),
        (status = 400, description = "Fewer than two name parts", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn get_alphabetized_driver_name_handler(
    State(state): State<AppState>,
    params: Result<Query<DriverFullNameQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;
    let full_name = params.driver_full_name.unwrap_or_default();
    Ok(state.drivers.alphabetized_driver_name(&full_name)?)
}
