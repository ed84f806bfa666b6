//! Handlers for the `/vehicles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fleet_core::error::CoreError;
use fleet_core::types::DbId;
use fleet_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use fleet_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /vehicles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /vehicles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = VehicleRepo::list(&state.pool).await?;
    Ok(Json(vehicles))
}

/// PUT /vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// DELETE /vehicles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = VehicleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
    }
}
