//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgAdministratorRepository`] - Administrator accounts and credential lookup
//! - [`PgVehicleRepository`] - Vehicle storage and retrieval

pub mod pg_administrator_repository;
pub mod pg_vehicle_repository;

pub use pg_administrator_repository::PgAdministratorRepository;
pub use pg_vehicle_repository::PgVehicleRepository;
