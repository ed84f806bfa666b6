//! Repository for the `trips` table, including the booking-conflict scan.

use fleet_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::trip::{CreateTrip, Trip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, driver_id, vehicle_id, start_location, end_location, start_time, end_time";

/// Provides trip persistence and the conflict scan used by the admission check.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    ///
    /// Callers must run [`TripRepo::find_conflicting`] first; the check and
    /// the insert are not atomic against concurrent trip creation.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (driver_id, vehicle_id, start_location, end_location, \
                                start_time, end_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(input.driver_id)
            .bind(input.vehicle_id)
            .bind(&input.start_location)
            .bind(&input.end_location)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(pool)
            .await
    }

    /// List all trips ordered by start time.
    pub async fn list(pool: &PgPool) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips ORDER BY start_time, id");
        sqlx::query_as::<_, Trip>(&query).fetch_all(pool).await
    }

    /// Find one existing trip that conflicts with the candidate window.
    ///
    /// A trip conflicts when it shares the driver OR the vehicle and the
    /// half-open intervals overlap (`start < candidate.end AND end >
    /// candidate.start`), with both intervals non-empty. Back-to-back trips
    /// and zero-duration windows on either side never match; this mirrors
    /// `fleet_core::booking::intervals_overlap`.
    pub async fn find_conflicting(
        pool: &PgPool,
        driver_id: DbId,
        vehicle_id: DbId,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips
             WHERE (driver_id = $1 OR vehicle_id = $2)
               AND $3 < $4
               AND start_time < end_time
               AND start_time < $4
               AND end_time > $3
             LIMIT 1"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(driver_id)
            .bind(vehicle_id)
            .bind(start_time)
            .bind(end_time)
            .fetch_optional(pool)
            .await
    }
}
