//! Vehicle entity model and DTOs.

use chrono::NaiveDate;
use fleet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub model: Option<String>,
    pub make: Option<String>,
    pub color: Option<String>,
    pub registration_number: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,
    pub year_of_car: Option<i32>,
}

/// DTO for creating a new vehicle. Only `name` is required.
#[derive(Debug, Deserialize)]
pub struct CreateVehicle {
    pub name: String,
    pub model: Option<String>,
    pub make: Option<String>,
    pub color: Option<String>,
    pub registration_number: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,
    pub year_of_car: Option<i32>,
}

/// DTO for updating a vehicle. The whole row is replaced; omitted optional
/// fields are cleared.
#[derive(Debug, Deserialize)]
pub struct UpdateVehicle {
    pub name: String,
    pub model: Option<String>,
    pub make: Option<String>,
    pub color: Option<String>,
    pub registration_number: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,
    pub year_of_car: Option<i32>,
}
