//! Top-level router configuration combining API and documentation routes.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing document (public)
//! - `POST /administrators/login`    - Login (public)
//! - `/administrators*`, `/vehicles*` - REST API (Bearer token required)
//! - `/swagger-ui`                   - Interactive documentation
//! - `/api-docs/openapi.json`        - OpenAPI document
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on protected routes
//! - **Path normalization** - Trailing slash handling on API routes

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// API routes with authentication applied to the protected set.
pub fn api_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
}

/// Swagger UI and the raw OpenAPI document.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed on API routes only; Swagger UI serves its
/// assets under `/swagger-ui/` and would otherwise redirect forever.
pub fn app_router(state: AppState) -> Router {
    let api = NormalizePathLayer::trim_trailing_slash().layer(api_router(state));

    Router::new()
        .merge(docs_router())
        .fallback_service(api)
        .layer(tracing::layer())
}
