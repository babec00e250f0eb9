//! Business logic services for the application layer.

pub mod administrator_service;
pub mod auth_service;
pub mod token_service;
pub mod vehicle_service;

pub use administrator_service::AdministratorService;
pub use auth_service::{AuthService, LoginOutcome};
pub use token_service::{Claims, TOKEN_TTL_HOURS, TokenService};
pub use vehicle_service::VehicleService;
