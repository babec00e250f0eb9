//! Vehicle CRUD service.

use crate::domain::entities::{NewVehicle, Page, Vehicle};
use crate::domain::repositories::VehicleRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing vehicles.
///
/// Field validation happens at the API boundary before these methods are
/// called; the service only orchestrates repository access.
pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleService {
    /// Creates a new vehicle service.
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_vehicle(&self, new_vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let created = self.repository.create(new_vehicle).await?;
        tracing::info!(id = created.id, "Vehicle created");
        Ok(created)
    }

    /// Lists vehicles, one page at a time or all at once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_vehicles(&self, page: Option<Page>) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list(page).await
    }

    /// Retrieves a vehicle by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Vehicle not found", json!({"id": id})))
    }

    /// Persists a full replacement of an existing vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let updated = self.repository.update(vehicle).await?;
        tracing::info!(id = updated.id, "Vehicle updated");
        Ok(updated)
    }

    /// Deletes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_vehicle(&self, id: i64) -> Result<(), AppError> {
        let vehicle = self.get_vehicle(id).await?;
        self.repository.delete(vehicle.id).await?;
        tracing::info!(id, "Vehicle deleted");
        Ok(())
    }
}
