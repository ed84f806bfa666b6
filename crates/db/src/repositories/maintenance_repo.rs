//! Repository for the `maintenance` table.

use fleet_core::types::DbId;
use sqlx::PgPool;

use crate::models::maintenance::{CreateMaintenance, Maintenance, UpdateMaintenance};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vehicle_id, description, cost, maintenance_date, next_due_date";

/// Provides CRUD operations for maintenance events.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Insert a new maintenance event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenance,
    ) -> Result<Maintenance, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance (vehicle_id, description, cost, maintenance_date, \
                                      next_due_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(input.vehicle_id)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.maintenance_date)
            .bind(input.next_due_date)
            .fetch_one(pool)
            .await
    }

    /// List all maintenance events, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Maintenance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance ORDER BY maintenance_date DESC, id");
        sqlx::query_as::<_, Maintenance>(&query)
            .fetch_all(pool)
            .await
    }

    /// List maintenance events for one vehicle, most recent first.
    pub async fn list_by_vehicle(
        pool: &PgPool,
        vehicle_id: DbId,
    ) -> Result<Vec<Maintenance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance
             WHERE vehicle_id = $1
             ORDER BY maintenance_date DESC, id"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(vehicle_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a maintenance row. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenance,
    ) -> Result<Option<Maintenance>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance SET
                vehicle_id = $2,
                description = $3,
                cost = $4,
                maintenance_date = $5,
                next_due_date = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(id)
            .bind(input.vehicle_id)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.maintenance_date)
            .bind(input.next_due_date)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a maintenance event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
