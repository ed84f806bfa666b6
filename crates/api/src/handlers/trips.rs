//! Handlers for the `/trips` resource.
//!
//! Trip creation runs the booking admission check: validate the time window,
//! scan for a conflicting trip, then insert. The check and the insert are
//! separate statements, so two concurrent creates for the same driver or
//! vehicle can both pass the scan before either commits (accepted
//! best-effort semantics, see DESIGN.md).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fleet_core::booking;
use fleet_core::error::CoreError;
use fleet_db::models::trip::{CreateTrip, Trip};
use fleet_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /trips
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Trip>>> {
    let trips = TripRepo::list(&state.pool).await?;
    Ok(Json(trips))
}

/// POST /trips
///
/// Admit the trip only if no existing trip shares its driver or vehicle with
/// an overlapping time window. Rejections are 400s with a human-readable
/// reason; nothing is persisted on rejection.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    booking::validate_window(input.start_time, input.end_time).map_err(AppError::Core)?;

    let conflicting = TripRepo::find_conflicting(
        &state.pool,
        input.driver_id,
        input.vehicle_id,
        input.start_time,
        input.end_time,
    )
    .await?;

    if let Some(existing) = conflicting {
        tracing::debug!(
            candidate_driver = input.driver_id,
            candidate_vehicle = input.vehicle_id,
            existing_trip = existing.id,
            "Rejecting trip: booking conflict"
        );
        return Err(AppError::Core(CoreError::Conflict(
            "Driver or vehicle is already booked for this time period".into(),
        )));
    }

    let trip = TripRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}
