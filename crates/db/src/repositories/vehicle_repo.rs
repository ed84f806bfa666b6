//! Repository for the `vehicles` table.

use fleet_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, model, make, color, registration_number, \
                       license_expiry_date, year_of_car";

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (name, model, make, color, registration_number, \
                                   license_expiry_date, year_of_car)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.make)
            .bind(&input.color)
            .bind(&input.registration_number)
            .bind(input.license_expiry_date)
            .bind(input.year_of_car)
            .fetch_one(pool)
            .await
    }

    /// List all vehicles ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY id");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// Replace a vehicle row. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                name = $2,
                model = $3,
                make = $4,
                color = $5,
                registration_number = $6,
                license_expiry_date = $7,
                year_of_car = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.model)
            .bind(&input.make)
            .bind(&input.color)
            .bind(&input.registration_number)
            .bind(input.license_expiry_date)
            .bind(input.year_of_car)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a vehicle. Returns `true` if a row was removed.
    ///
    /// Trips and maintenance rows referencing the vehicle are left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
