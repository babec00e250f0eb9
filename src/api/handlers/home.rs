//! Handler for the root endpoint.

use axum::Json;

use crate::api::dto::HomeResponse;

/// Points clients at the interactive documentation.
///
/// # Endpoint
///
/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing document", body = HomeResponse),
    ),
    tag = "home"
)]
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the vehicles API".to_string(),
        documentation: "/swagger-ui".to_string(),
    })
}
