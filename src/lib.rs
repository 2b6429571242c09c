pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::driver_service::DriverService;
pub use domain::auth::BasicAuthenticator;
pub use domain::driver::{AlphabetizedDriver, Driver, DriverPayload};
pub use error::{ServiceError, StoreError};
pub use infra::config::AppConfig;
pub use storage::driver::{DriverStore, SqliteDriverStore};
