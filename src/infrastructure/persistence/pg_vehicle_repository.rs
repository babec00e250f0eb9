//! PostgreSQL implementation of vehicle repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewVehicle, Page, Vehicle};
use crate::domain::repositories::VehicleRepository;
use crate::error::AppError;

/// PostgreSQL repository for vehicles.
///
/// Deletes are hard deletes; `vehicles_year_check` enforces the minimum year.
pub struct PgVehicleRepository {
    pool: Arc<PgPool>,
}

impl PgVehicleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VehicleRow {
    id: i64,
    name: String,
    brand: String,
    year: i32,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle::new(row.id, row.name, row.brand, row.year)
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn create(&self, new_vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (name, brand, year)
            VALUES ($1, $2, $3)
            RETURNING id, name, brand, year
            "#,
        )
        .bind(&new_vehicle.name)
        .bind(&new_vehicle.brand)
        .bind(new_vehicle.year)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, year
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Vehicle::from))
    }

    async fn list(&self, page: Option<Page>) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, year
            FROM vehicles
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.map(|p| p.limit()))
        .bind(page.map(|p| p.offset()))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles SET
                name  = $2,
                brand = $3,
                year  = $4
            WHERE id = $1
            RETURNING id, name, brand, year
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(vehicle.year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Vehicle::from)
            .ok_or_else(|| AppError::not_found("Vehicle not found", json!({ "id": vehicle.id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Vehicle not found", json!({ "id": id })));
        }

        Ok(())
    }
}
