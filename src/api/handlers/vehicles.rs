//! Handlers for vehicle endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::authorization::{AdminOnly, AdminOrEditor, AnyRole, Authorized};
use crate::api::dto::{PaginationParams, VehicleRequest, VehicleResponse};
use crate::api::extract::JsonBody;
use crate::api::validation::validate_vehicle;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Registers a vehicle.
///
/// # Endpoint
///
/// `POST /vehicles`
///
/// # Request Body
///
/// ```json
/// { "name": "Fusca", "brand": "VW", "year": 1980 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request listing every failed rule (empty name, empty
/// brand, year before 1900).
#[utoipa::path(
    post,
    path = "/vehicles",
    request_body = VehicleRequest,
    responses(
        (status = 201, description = "Created", body = VehicleResponse,
            headers(("Location" = String, description = "Path of the new vehicle"))),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn create_vehicle_handler(
    _auth: Authorized<AdminOrEditor>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_vehicle(&payload).into_result()?;

    let vehicle = state.vehicle_service.create_vehicle(payload.into()).await?;
    let location = format!("/vehicles/{}", vehicle.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VehicleResponse::from(vehicle)),
    ))
}

/// Lists vehicles, optionally one page of 10 at a time.
///
/// # Endpoint
///
/// `GET /vehicles?page=N`
#[utoipa::path(
    get,
    path = "/vehicles",
    params(PaginationParams),
    responses(
        (status = 200, description = "Vehicles", body = Vec<VehicleResponse>),
        (status = 400, description = "Invalid page", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn vehicle_list_handler(
    _auth: Authorized<AnyRole>,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let page = params.to_page()?;

    let vehicles = state.vehicle_service.list_vehicles(page).await?;

    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle", body = VehicleResponse),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn get_vehicle_handler(
    _auth: Authorized<AdminOrEditor>,
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<VehicleResponse>, AppError> {
    let vehicle = state.vehicle_service.get_vehicle(id).await?;

    Ok(Json(vehicle.into()))
}

/// Overwrites every field of an existing vehicle.
///
/// # Endpoint
///
/// `PUT /vehicles/{id}`
///
/// # Errors
///
/// - 404 if the vehicle does not exist, checked before the body is validated
/// - 400 listing every failed rule
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle ID")),
    request_body = VehicleRequest,
    responses(
        (status = 200, description = "Updated", body = VehicleResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn update_vehicle_handler(
    _auth: Authorized<AdminOnly>,
    Path(id): Path<i64>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let mut vehicle = state.vehicle_service.get_vehicle(id).await?;

    validate_vehicle(&payload).into_result()?;

    vehicle.overwrite(payload.into());
    let updated = state.vehicle_service.update_vehicle(vehicle).await?;

    Ok(Json(updated.into()))
}

/// Removes a vehicle.
///
/// # Endpoint
///
/// `DELETE /vehicles/{id}`
///
/// # Response
///
/// 204 No Content on success, 404 if the vehicle does not exist.
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 403, description = "Forbidden", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
    ),
    security(("bearer" = [])),
    tag = "vehicles"
)]
pub async fn delete_vehicle_handler(
    _auth: Authorized<AdminOnly>,
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.vehicle_service.delete_vehicle(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
