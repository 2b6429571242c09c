use crate::app::driver_service::DEFAULT_RANDOM_DRIVER_COUNT;
use crate::domain::driver::{Driver, DriverPayload};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, AppState, DriverIdQuery, RandomDriversQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

fn body<T>(request: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    request
        .map(|Json(v)| v)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))
}

fn query<T>(request: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    request
        .map(|Query(v)| v)
        .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))
}

#[utoipa::path(
    get,
    path = "/api/Driver/GetAllDrivers",
    responses(
        (status = 200, description = "All drivers ordered by first name", body = [Driver]),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn get_all_drivers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, ApiError> {
    Ok(Json(state.drivers.get_all_drivers().await?))
}

#[utoipa::path(
    get,
    path = "/api/Driver/GetDriver",
    params(DriverIdQuery),
    responses(
        (status = 200, description = "Driver found", body = Driver),
        (status = 400, description = "Bad query string", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "Driver not found", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn get_driver_handler(
    State(state): State<AppState>,
    params: Result<Query<DriverIdQuery>, QueryRejection>,
) -> Result<Json<Driver>, ApiError> {
    let params = query(params)?;
    Ok(Json(state.drivers.get_driver(params.driver_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/Driver/AddDriver",
    request_body = DriverPayload,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 400, description = "Invalid driver", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn add_driver_handler(
    State(state): State<AppState>,
    request: Result<Json<DriverPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = body(request)?;
    let driver = state.drivers.add_driver(payload).await?;
    let location = format!("/api/Driver/GetDriver?driverId={}", driver.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(driver)))
}

#[utoipa::path(
    put,
    path = "/api/Driver/UpdateDriver",
    request_body = DriverPayload,
    responses(
        (status = 200, description = "Driver updated", body = String),
        (status = 400, description = "Invalid driver or id", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "Driver not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn update_driver_handler(
    State(state): State<AppState>,
    request: Result<Json<DriverPayload>, JsonRejection>,
) -> Result<String, ApiError> {
    let payload = body(request)?;
    let driver = state.drivers.update_driver(payload).await?;
    Ok(format!("Driver with id: {} is updated successfully", driver.id))
}

#[utoipa::path(
    delete,
    path = "/api/Driver/DeleteDriver",
    params(DriverIdQuery),
    responses(
        (status = 200, description = "Driver deleted", body = String),
        (status = 400, description = "Invalid driver id", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 404, description = "Driver not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn delete_driver_handler(
    State(state): State<AppState>,
    params: Result<Query<DriverIdQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let driver_id = query(params)?.driver_id;
    state.drivers.delete_driver(driver_id).await?;
    Ok(format!("Driver with id: {} is deleted successfully", driver_id))
}

#[utoipa::path(
    post,
    path = "/api/Driver/InsertRandomDriverNames",
    params(RandomDriversQuery),
    responses(
        (status = 200, description = "Inserted drivers with their ids", body = [Driver]),
        (status = 400, description = "Bad query string", body = ApiResponse),
        (status = 401, description = "Missing or invalid credentials", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
    security(("basicAuth" = []))
)]
pub async fn insert_random_drivers_handler(
    State(state): State<AppState>,
    params: Result<Query<RandomDriversQuery>, QueryRejection>,
) -> Result<Json<Vec<Driver>>, ApiError> {
    let count = query(params)?
        .drivers_count_to_be_inserted
        .unwrap_or(DEFAULT_RANDOM_DRIVER_COUNT);
    Ok(Json(state.drivers.insert_random_drivers(count).await?))
}
