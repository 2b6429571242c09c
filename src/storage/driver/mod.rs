//! Data access for the `Drivers` table.

use crate::domain::driver::Driver;
use crate::error::StoreResult;
use async_trait::async_trait;

pub mod sqlite;

pub use sqlite::SqliteDriverStore;

/// Contract for the driver table. Every method is one parameterized statement.
#[async_trait]
pub trait DriverStore: Send + Sync {
    /// Creates the table if it does not exist yet.
    async fn create_table(&self) -> StoreResult<()>;

    /// All drivers ordered by first name ascending.
    async fn list_all(&self) -> StoreResult<Vec<Driver>>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Driver>>;

    /// Inserts the driver (its `id` is ignored) and returns the id assigned by the store.
    async fn insert(&self, driver: &Driver) -> StoreResult<i64>;

    /// Overwrites every field of the row with `driver.id`. Returns rows affected, which is 0 for
    /// an unknown id.
    async fn update(&self, driver: &Driver) -> StoreResult<u64>;

    /// Returns rows affected.
    async fn delete(&self, id: i64) -> StoreResult<u64>;

    async fn exists(&self, id: i64) -> StoreResult<bool>;

    /// Round-trips a trivial statement to prove the database is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
