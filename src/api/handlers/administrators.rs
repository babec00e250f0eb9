//! Handlers for administrator endpoints (login, list, get, create).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::authorization::{AdminOnly, Authorized};
use crate::api::dto::{
    AdministratorRequest, AdministratorView, LoginRequest, LoginResponse, PaginationParams,
};
use crate::api::extract::JsonBody;
use crate::api::validation::new_administrator;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /administrators/login`
///
/// # Request Body
///
/// ```json
/// { "email": "adm@teste.com", "password": "123456" }
/// ```
///
/// # Response
///
/// ```json
/// { "email": "adm@teste.com", "role": "admin", "token": "eyJhbGciOi..." }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized if no administrator matches both fields.
#[utoipa::path(
    post,
    path = "/administrators/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
    ),
    tag = "administrators"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let outcome = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        email: outcome.administrator.email,
        role: outcome.administrator.role,
        token: outcome.token,
    }))
}

/// Lists administrators, optionally one page of 10 at a time.
///
/// # Endpoint
///
/// `GET /administrators?page=N`
///
/// # Errors
///
/// Returns 400 Bad Request if `page` is 0.
#[utoipa::path(
    get,
    path = "/administrators",
    params(PaginationParams),
    responses(
        (status = 200, description = "Administrators", body = Vec<AdministratorView>),
        (status = 400, description = "Invalid page", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn administrator_list_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<AdministratorView>>, AppError> {
    let page = params.to_page()?;

    let administrators = state
        .administrator_service
        .list_administrators(page)
        .await?;

    Ok(Json(
        administrators
            .into_iter()
            .map(AdministratorView::from)
            .collect(),
    ))
}

/// Returns a single administrator.
///
/// # Endpoint
///
/// `GET /administrators/{id}`
#[utoipa::path(
    get,
    path = "/administrators/{id}",
    params(("id" = i64, Path, description = "Administrator ID")),
    responses(
        (status = 200, description = "Administrator", body = AdministratorView),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn get_administrator_handler(
    _auth: Authorized<AdminOnly>,
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AdministratorView>, AppError> {
    let administrator = state.administrator_service.get_administrator(id).await?;

    Ok(Json(administrator.into()))
}

/// Creates an administrator.
///
/// # Endpoint
///
/// `POST /administrators`
///
/// # Request Body
///
/// ```json
/// { "email": "editor@teste.com", "password": "secret", "role": "editor" }
/// ```
///
/// # Errors
///
/// - 400 with every failed rule listed under `details.messages`
/// - 409 if the email is already taken
#[utoipa::path(
    post,
    path = "/administrators",
    request_body = AdministratorRequest,
    responses(
        (status = 201, description = "Created", body = AdministratorView,
            headers(("Location" = String, description = "Path of the new administrator"))),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "administrators"
)]
pub async fn create_administrator_handler(
    _auth: Authorized<AdminOnly>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AdministratorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_administrator = new_administrator(payload)?;

    let administrator = state
        .administrator_service
        .create_administrator(new_administrator)
        .await?;

    let location = format!("/administrators/{}", administrator.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AdministratorView::from(administrator)),
    ))
}
