//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for unit tests
//! - HTTP integration tests inject in-memory implementations (`tests/common`)
//!
//! # Available Repositories
//!
//! - [`AdministratorRepository`] - Administrator accounts and credential lookup
//! - [`VehicleRepository`] - Vehicle CRUD operations

pub mod administrator_repository;
pub mod vehicle_repository;

pub use administrator_repository::AdministratorRepository;
pub use vehicle_repository::VehicleRepository;

#[cfg(test)]
pub use administrator_repository::MockAdministratorRepository;
#[cfg(test)]
pub use vehicle_repository::MockVehicleRepository;
