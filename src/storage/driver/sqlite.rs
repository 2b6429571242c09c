//! Driver store implementation using SQLite.

use super::DriverStore;
use crate::domain::driver::Driver;
use crate::error::StoreResult;
use crate::infra::config::DatabaseConfig;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS Drivers (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    FirstName TEXT NOT NULL,
    LastName TEXT NOT NULL,
    Email TEXT NOT NULL,
    PhoneNumber TEXT NOT NULL
)";

/// A driver store backed by a SQLite connection pool. Each statement checks a connection out of
/// the pool and returns it when done.
#[derive(Clone)]
pub struct SqliteDriverStore {
    pool: SqlitePool,
}

impl SqliteDriverStore {
    /// Opens (creating if needed) the database at `config.url` and ensures the table exists.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;
        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: SqlitePool) -> StoreResult<Self> {
        let store = Self { pool };
        store.create_table().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn driver_from_row(row: &SqliteRow) -> Result<Driver, sqlx::Error> {
    Ok(Driver {
        id: row.try_get("Id")?,
        first_name: row.try_get("FirstName")?,
        last_name: row.try_get("LastName")?,
        email: row.try_get("Email")?,
        phone_number: row.try_get("PhoneNumber")?,
    })
}

#[async_trait]
impl DriverStore for SqliteDriverStore {
    async fn create_table(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        tracing::debug!("Drivers table ready");
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<Driver>> {
        let rows = sqlx::query(
            "SELECT Id, FirstName, LastName, Email, PhoneNumber FROM Drivers ORDER BY FirstName",
        )
        .fetch_all(&self.pool)
        .await?;
        let drivers = rows
            .iter()
            .map(driver_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(drivers)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Driver>> {
        let row = sqlx::query(
            "SELECT Id, FirstName, LastName, Email, PhoneNumber FROM Drivers WHERE Id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(driver_from_row).transpose()?)
    }

    async fn insert(&self, driver: &Driver) -> StoreResult<i64> {
        let result = sqlx::query(
            "INSERT INTO Drivers (FirstName, LastName, Email, PhoneNumber) VALUES (?, ?, ?, ?)",
        )
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.email)
        .bind(&driver.phone_number)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, driver: &Driver) -> StoreResult<u64> {
        let result = sqlx::query(
            "UPDATE Drivers SET FirstName = ?, LastName = ?, Email = ?, PhoneNumber = ?
             WHERE Id = ?",
        )
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.email)
        .bind(&driver.phone_number)
        .bind(driver.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM Drivers WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn exists(&self, id: i64) -> StoreResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM Drivers WHERE Id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
