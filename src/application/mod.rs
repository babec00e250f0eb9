//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential login and bearer token validation
//! - [`services::token_service::TokenService`] - JWT signing and verification
//! - [`services::administrator_service::AdministratorService`] - Administrator management
//! - [`services::vehicle_service::VehicleService`] - Vehicle CRUD

pub mod services;
