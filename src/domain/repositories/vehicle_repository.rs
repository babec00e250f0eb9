//! Repository trait for vehicles.

use crate::domain::entities::{NewVehicle, Page, Vehicle};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for vehicle CRUD operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVehicleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Inserts a vehicle and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a database constraint rejects the row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_vehicle: NewVehicle) -> Result<Vehicle, AppError>;

    /// Finds a vehicle by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError>;

    /// Lists vehicles ordered by id; `None` returns every record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: Option<Page>) -> Result<Vec<Vehicle>, AppError>;

    /// Overwrites name, brand and year of the vehicle with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vehicle has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, AppError>;

    /// Permanently removes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vehicle has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
