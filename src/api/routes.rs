//! API route configuration.
//!
//! Routes are split by whether they need a bearer token; the protected set is
//! wrapped in [`crate::api::middleware::auth`] by [`crate::routes::api_router`].

use crate::api::handlers::{
    administrator_list_handler, create_administrator_handler, create_vehicle_handler,
    delete_vehicle_handler, get_administrator_handler, get_vehicle_handler, home_handler,
    login_handler, update_vehicle_handler, vehicle_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `GET  /`                     - Landing document
/// - `POST /administrators/login` - Exchange credentials for a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/administrators/login", post(login_handler))
}

/// Routes protected by Bearer token authentication.
///
/// Per-route role requirements are enforced by the
/// [`Authorized`](crate::api::authorization::Authorized) extractor.
///
/// # Endpoints
///
/// - `GET    /administrators`       - List administrators (admin)
/// - `POST   /administrators`       - Create an administrator (admin)
/// - `GET    /administrators/{id}`  - Get an administrator (admin)
/// - `GET    /vehicles`             - List vehicles (any role)
/// - `POST   /vehicles`             - Create a vehicle (admin, editor)
/// - `GET    /vehicles/{id}`        - Get a vehicle (admin, editor)
/// - `PUT    /vehicles/{id}`        - Overwrite a vehicle (admin)
/// - `DELETE /vehicles/{id}`        - Delete a vehicle (admin)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/administrators",
            get(administrator_list_handler).post(create_administrator_handler),
        )
        .route("/administrators/{id}", get(get_administrator_handler))
        .route(
            "/vehicles",
            get(vehicle_list_handler).post(create_vehicle_handler),
        )
        .route(
            "/vehicles/{id}",
            get(get_vehicle_handler)
                .put(update_vehicle_handler)
                .delete(delete_vehicle_handler),
        )
}
