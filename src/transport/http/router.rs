use crate::domain::driver::{AlphabetizedDriver, Driver, DriverPayload, FieldError};
use crate::transport::http::handlers::{alphabetize, drivers, health};
use crate::transport::http::middleware::require_basic_auth;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        drivers::get_all_drivers_handler,
        drivers::get_driver_handler,
        drivers::add_driver_handler,
        drivers::update_driver_handler,
        drivers::delete_driver_handler,
        drivers::insert_random_drivers_handler,
        alphabetize::get_all_drivers_alphabetized_handler,
        alphabetize::get_alphabetized_driver_name_handler
    ),
    components(schemas(ApiResponse, Driver, DriverPayload, AlphabetizedDriver, FieldError)),
    modifiers(&BasicAuthAddon)
)]
pub struct ApiDoc;

/// Registers the `basicAuth` scheme referenced by every path.
struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basicAuth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}

/// Every route, including `/health`, sits behind Basic authentication.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/Driver/GetAllDrivers", get(drivers::get_all_drivers_handler))
        .route("/api/Driver/GetDriver", get(drivers::get_driver_handler))
        .route("/api/Driver/AddDriver", post(drivers::add_driver_handler))
        .route("/api/Driver/UpdateDriver", put(drivers::update_driver_handler))
        .route("/api/Driver/DeleteDriver", delete(drivers::delete_driver_handler))
        .route(
            "/api/Driver/InsertRandomDriverNames",
            post(drivers::insert_random_drivers_handler),
        )
        .route(
            "/api/Driver/GetAllDriversAlphabetized",
            get(alphabetize::get_all_drivers_alphabetized_handler),
        )
        .route(
            "/api/Driver/GetAlphabetizedDriverName",
            get(alphabetize::get_alphabetized_driver_name_handler),
        )
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_basic_auth,
        ))
        .with_state(app_state)
}
