//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod administrators;
pub mod home;
pub mod vehicles;

pub use administrators::{
    administrator_list_handler, create_administrator_handler, get_administrator_handler,
    login_handler,
};
pub use home::home_handler;
pub use vehicles::{
    create_vehicle_handler, delete_vehicle_handler, get_vehicle_handler, update_vehicle_handler,
    vehicle_list_handler,
};
