//! Core domain entities.
//!
//! Entities are plain data structures without persistence or HTTP concerns.
//!
//! # Entity Types
//!
//! - [`Administrator`] - An account that can authenticate against the API
//! - [`Vehicle`] - A registered vehicle
//! - [`Role`] - Closed set of authorization roles
//! - [`Page`] - A 1-indexed page of a listing
//!
//! Creation inputs use separate structs (`NewAdministrator`, `NewVehicle`)
//! since ids are assigned by the database.

pub mod administrator;
pub mod page;
pub mod role;
pub mod vehicle;

pub use administrator::{Administrator, NewAdministrator};
pub use page::{PAGE_SIZE, Page};
pub use role::{Role, UnknownRole};
pub use vehicle::{MIN_VEHICLE_YEAR, NewVehicle, Vehicle};
