//! Driver entity model and DTOs.

use fleet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full driver row from the `drivers` table.
///
/// `vehicle_id` is an informal assignment, not a foreign key: the referenced
/// vehicle may have been deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Driver {
    pub id: DbId,
    pub name: String,
    pub vehicle_id: Option<DbId>,
    pub experience_years: Option<i32>,
    pub license_number: Option<String>,
    pub contact_info: Option<String>,
}

/// DTO for creating a new driver. Only `name` is required.
#[derive(Debug, Deserialize)]
pub struct CreateDriver {
    pub name: String,
    pub vehicle_id: Option<DbId>,
    pub experience_years: Option<i32>,
    pub license_number: Option<String>,
    pub contact_info: Option<String>,
}

/// DTO for updating a driver. The whole row is replaced; omitted optional
/// fields are cleared.
#[derive(Debug, Deserialize)]
pub struct UpdateDriver {
    pub name: String,
    pub vehicle_id: Option<DbId>,
    pub experience_years: Option<i32>,
    pub license_number: Option<String>,
    pub contact_info: Option<String>,
}
