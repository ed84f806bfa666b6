//! Maintenance event model and DTOs.

use chrono::NaiveDate;
use fleet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full maintenance row from the `maintenance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Maintenance {
    pub id: DbId,
    pub vehicle_id: DbId,
    pub description: String,
    /// Non-negative monetary value.
    pub cost: f64,
    pub maintenance_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
}

/// DTO for recording a maintenance event.
#[derive(Debug, Deserialize)]
pub struct CreateMaintenance {
    pub vehicle_id: DbId,
    pub description: String,
    pub cost: f64,
    pub maintenance_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
}

/// DTO for updating a maintenance event. The whole row is replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateMaintenance {
    pub vehicle_id: DbId,
    pub description: String,
    pub cost: f64,
    pub maintenance_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
}
