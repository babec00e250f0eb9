//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization, `validator`
//! for input rules, and `utoipa` for the OpenAPI schema.

pub mod administrator;
pub mod home;
pub mod pagination;
pub mod vehicle;

pub use administrator::{AdministratorRequest, AdministratorView, LoginRequest, LoginResponse};
pub use home::HomeResponse;
pub use pagination::PaginationParams;
pub use vehicle::{VehicleRequest, VehicleResponse};
