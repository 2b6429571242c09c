pub mod error;
pub mod middleware;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod alphabetize;
    pub mod drivers;
    pub mod health;
}

pub use error::ApiError;
pub use router::{create_router, ApiDoc};
pub use types::AppState;
