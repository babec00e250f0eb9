//! DTOs for vehicle endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{NewVehicle, Vehicle};

/// Request body for `POST /vehicles` and `PUT /vehicles/{id}`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VehicleRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "The name field must not be empty"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "The brand field must not be empty"))]
    pub brand: String,

    #[serde(default)]
    #[validate(range(
        min = 1900,
        message = "The year field is too old: only vehicles manufactured in 1900 or later are accepted"
    ))]
    pub year: i32,
}

impl VehicleRequest {
    /// Field names in the order validation messages are reported.
    pub const FIELDS: [&'static str; 3] = ["name", "brand", "year"];
}

impl From<VehicleRequest> for NewVehicle {
    fn from(request: VehicleRequest) -> Self {
        Self {
            name: request.name,
            brand: request.brand,
            year: request.year,
        }
    }
}

/// Vehicle representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            brand: vehicle.brand,
            year: vehicle.year,
        }
    }
}
