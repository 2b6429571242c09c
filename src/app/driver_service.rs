//! The Driver Service.
//!
//! Sits between the HTTP handlers and the [`DriverStore`]. It is responsible for:
//! 1.  Rejecting ids and names that can never succeed before touching storage.
//! 2.  Pre-checking existence for update/delete so missing rows surface as `NotFound`.
//! 3.  Building the derived views (random seed data, alphabetized names).

use crate::domain::driver::{
    alphabetize_tokens, random_driver, AlphabetizedDriver, Driver, DriverPayload, FieldError,
};
use crate::error::{ServiceError, ServiceResult};
use crate::storage::driver::DriverStore;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const DEFAULT_RANDOM_DRIVER_COUNT: i64 = 10;

/// Logs a storage failure with the operation that hit it, then passes it on.
fn log_failure<T>(op: &str, result: ServiceResult<T>) -> ServiceResult<T> {
    if let Err(ServiceError::Store(e)) = &result {
        error!(operation = op, error = %e, "driver store operation failed");
    }
    result
}

#[derive(Clone)]
pub struct DriverService {
    store: Arc<dyn DriverStore>,
}

impl DriverService {
    pub fn new(store: Arc<dyn DriverStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DriverStore> {
        &self.store
    }

    pub async fn get_all_drivers(&self) -> ServiceResult<Vec<Driver>> {
        debug!("getting all drivers");
        let result = self.store.list_all().await.map_err(ServiceError::from);
        let drivers = log_failure("get_all_drivers", result)?;
        debug!(count = drivers.len(), "drivers listed");
        Ok(drivers)
    }

    pub async fn get_driver(&self, id: i64) -> ServiceResult<Driver> {
        debug!(id, "getting driver");
        let result = match self.store.get_by_id(id).await {
            Ok(Some(driver)) => Ok(driver),
            Ok(None) => Err(ServiceError::NotFound(format!("Driver with id {} not found.", id))),
            Err(e) => Err(e.into()),
        };
        let driver = log_failure("get_driver", result)?;
        debug!(id, "driver found");
        Ok(driver)
    }

    /// Validates the payload, inserts it and returns the stored driver with its new id.
    pub async fn add_driver(&self, payload: DriverPayload) -> ServiceResult<Driver> {
        debug!("adding driver");
        let mut driver = payload.validate().map_err(ServiceError::Validation)?;
        let result = self.store.insert(&driver).await.map_err(ServiceError::from);
        driver.id = log_failure("add_driver", result)?;
        info!(id = driver.id, "driver added");
        Ok(driver)
    }

    pub async fn update_driver(&self, payload: DriverPayload) -> ServiceResult<Driver> {
        debug!(id = payload.id, "updating driver");
        let mut errors = Vec::new();
        if payload.id <= 0 {
            errors.push(FieldError::new("id", "Driver id must be positive."));
        }
        let driver = match payload.validate() {
            Ok(d) if errors.is_empty() => d,
            Ok(_) => return Err(ServiceError::Validation(errors)),
            Err(body_errors) => {
                errors.extend(body_errors);
                return Err(ServiceError::Validation(errors));
            }
        };

        let result: ServiceResult<()> = async {
            if !self.store.exists(driver.id).await? {
                return Err(ServiceError::NotFound("Driver not found.".to_string()));
            }
            // The row can disappear between the existence check and the update.
            if self.store.update(&driver).await? == 0 {
                return Err(ServiceError::NotFound("Driver not found.".to_string()));
            }
            Ok(())
        }
        .await;
        log_failure("update_driver", result)?;

        info!(id = driver.id, "driver updated");
        Ok(driver)
    }

    pub async fn delete_driver(&self, id: i64) -> ServiceResult<()> {
        debug!(id, "deleting driver");
        if id == 0 {
            return Err(ServiceError::invalid("driverId", "Invalid driver id"));
        }

        let result: ServiceResult<()> = async {
            if !self.store.exists(id).await? {
                return Err(ServiceError::NotFound("Driver not found.".to_string()));
            }
            if self.store.delete(id).await? == 0 {
                return Err(ServiceError::NotFound("Driver not found.".to_string()));
            }
            Ok(())
        }
        .await;
        log_failure("delete_driver", result)?;

        info!(id, "driver deleted");
        Ok(())
    }

    /// Inserts `count` synthetic drivers one statement at a time.
    ///
    /// A zero or negative count inserts nothing and returns an empty batch.
    pub async fn insert_random_drivers(&self, count: i64) -> ServiceResult<Vec<Driver>> {
        debug!(count, "inserting random drivers");
        // Generate up front: `ThreadRng` is not `Send` and must not live across an await.
        let batch: Vec<Driver> = {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| random_driver(&mut rng)).collect()
        };

        let mut inserted = Vec::with_capacity(batch.len());
        for mut driver in batch {
            let result = self.store.insert(&driver).await.map_err(ServiceError::from);
            driver.id = log_failure("insert_random_drivers", result)?;
            inserted.push(driver);
        }

        info!(count = inserted.len(), "random drivers inserted");
        Ok(inserted)
    }

    pub async fn get_all_drivers_alphabetized(&self) -> ServiceResult<Vec<AlphabetizedDriver>> {
        debug!("alphabetizing all drivers");
        let drivers = self.get_all_drivers().await?;
        let alphabetized: Vec<AlphabetizedDriver> =
            drivers.iter().map(AlphabetizedDriver::from).collect();
        debug!(count = alphabetized.len(), "drivers alphabetized");
        Ok(alphabetized)
    }

    pub fn alphabetized_driver_name(&self, full_name: &str) -> ServiceResult<String> {
        debug!("alphabetizing driver name");
        let alphabetized = alphabetize_tokens(full_name).ok_or_else(|| {
            ServiceError::invalid(
                "driverFullName",
                "Driver full name must contain a first and a last name separated by whitespace.",
            )
        })?;
        debug!(name = %alphabetized, "driver name alphabetized");
        Ok(alphabetized)
    }
}
