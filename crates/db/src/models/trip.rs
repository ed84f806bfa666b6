//! Trip entity model and DTOs.

use fleet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full trip row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub driver_id: DbId,
    pub vehicle_id: DbId,
    pub start_location: String,
    pub end_location: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

/// DTO for creating a new trip. All fields are required; the booking
/// conflict check runs before the insert.
#[derive(Debug, Deserialize)]
pub struct CreateTrip {
    pub driver_id: DbId,
    pub vehicle_id: DbId,
    pub start_location: String,
    pub end_location: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}
