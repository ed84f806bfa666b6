//! Repository for the `drivers` table.

use fleet_core::types::DbId;
use sqlx::PgPool;

use crate::models::driver::{CreateDriver, Driver, UpdateDriver};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, vehicle_id, experience_years, license_number, contact_info";

/// Provides CRUD operations for drivers.
pub struct DriverRepo;

impl DriverRepo {
    /// Insert a new driver, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDriver) -> Result<Driver, sqlx::Error> {
        let query = format!(
            "INSERT INTO drivers (name, vehicle_id, experience_years, license_number, contact_info)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(&input.name)
            .bind(input.vehicle_id)
            .bind(input.experience_years)
            .bind(&input.license_number)
            .bind(&input.contact_info)
            .fetch_one(pool)
            .await
    }

    /// List all drivers ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Driver>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drivers ORDER BY id");
        sqlx::query_as::<_, Driver>(&query).fetch_all(pool).await
    }

    /// Replace a driver row. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDriver,
    ) -> Result<Option<Driver>, sqlx::Error> {
        let query = format!(
            "UPDATE drivers SET
                name = $2,
                vehicle_id = $3,
                experience_years = $4,
                license_number = $5,
                contact_info = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Driver>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.vehicle_id)
            .bind(input.experience_years)
            .bind(&input.license_number)
            .bind(&input.contact_info)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a driver. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
