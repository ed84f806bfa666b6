//! Handlers for the `/maintenance` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fleet_core::error::CoreError;
use fleet_core::types::DbId;
use fleet_db::models::maintenance::{CreateMaintenance, Maintenance, UpdateMaintenance};
use fleet_db::repositories::MaintenanceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Reject negative costs before they hit the CHECK constraint, so the
/// client gets a validation message instead of a sanitized 500.
fn validate_cost(cost: f64) -> Result<(), AppError> {
    if cost < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Maintenance cost must not be negative".into(),
        )));
    }
    Ok(())
}

/// POST /maintenance
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<Maintenance>)> {
    validate_cost(input.cost)?;
    let event = MaintenanceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /maintenance
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Maintenance>>> {
    let events = MaintenanceRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /maintenance/vehicle/{vehicle_id}
///
/// Per-vehicle filter. An unknown vehicle id simply yields an empty list;
/// vehicle ids are not validated against the vehicles table.
pub async fn list_by_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<DbId>,
) -> AppResult<Json<Vec<Maintenance>>> {
    let events = MaintenanceRepo::list_by_vehicle(&state.pool, vehicle_id).await?;
    Ok(Json(events))
}

/// PUT /maintenance/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenance>,
) -> AppResult<Json<Maintenance>> {
    validate_cost(input.cost)?;
    let event = MaintenanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Maintenance",
            id,
        }))?;
    Ok(Json(event))
}

/// DELETE /maintenance/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MaintenanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Maintenance",
            id,
        }))
    }
}
