//! Read-only aggregate queries feeding the dashboard.
//!
//! Scalar aggregates (counts, the rolling cost sum) are computed in SQL;
//! the monthly bucketing runs in `fleet_core::reporting` over the raw rows
//! fetched here.

use chrono::NaiveDate;
use fleet_core::types::Timestamp;
use sqlx::PgPool;

/// Cardinality of the three main entity tables.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct TotalCounts {
    pub total_vehicles: i64,
    pub total_drivers: i64,
    pub total_trips: i64,
}

/// One maintenance row projected down to what the cost bucketing needs.
#[derive(Debug, sqlx::FromRow)]
pub struct MaintenanceCostRow {
    pub maintenance_date: NaiveDate,
    pub cost: f64,
}

/// Provides the aggregate reads behind `/stats`.
pub struct StatsRepo;

impl StatsRepo {
    /// Unfiltered row counts for vehicles, drivers and trips.
    pub async fn total_counts(pool: &PgPool) -> Result<TotalCounts, sqlx::Error> {
        let query = "\
            SELECT \
                (SELECT COUNT(*) FROM vehicles) AS total_vehicles, \
                (SELECT COUNT(*) FROM drivers) AS total_drivers, \
                (SELECT COUNT(*) FROM trips) AS total_trips";
        sqlx::query_as::<_, TotalCounts>(query).fetch_one(pool).await
    }

    /// Count trips whose start time falls in the calendar month of `now`.
    pub async fn trips_in_month_of(pool: &PgPool, now: Timestamp) -> Result<i64, sqlx::Error> {
        let query = "\
            SELECT COUNT(*) FROM trips \
            WHERE date_trunc('month', start_time) = date_trunc('month', $1)";
        sqlx::query_scalar::<_, i64>(query).bind(now).fetch_one(pool).await
    }

    /// Sum of maintenance costs on or after `cutoff`. Empty sets sum to `0.0`.
    pub async fn maintenance_cost_since(
        pool: &PgPool,
        cutoff: NaiveDate,
    ) -> Result<f64, sqlx::Error> {
        let query = "\
            SELECT COALESCE(SUM(cost), 0)::FLOAT8 FROM maintenance \
            WHERE maintenance_date >= $1";
        sqlx::query_scalar::<_, f64>(query)
            .bind(cutoff)
            .fetch_one(pool)
            .await
    }

    /// Start times of trips beginning on or after `cutoff`, ascending.
    pub async fn trip_starts_since(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<Vec<Timestamp>, sqlx::Error> {
        let query = "SELECT start_time FROM trips WHERE start_time >= $1 ORDER BY start_time";
        sqlx::query_scalar::<_, Timestamp>(query)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// (date, cost) pairs for maintenance on or after `cutoff`, ascending.
    pub async fn maintenance_costs_since(
        pool: &PgPool,
        cutoff: NaiveDate,
    ) -> Result<Vec<MaintenanceCostRow>, sqlx::Error> {
        let query = "\
            SELECT maintenance_date, cost FROM maintenance \
            WHERE maintenance_date >= $1 \
            ORDER BY maintenance_date";
        sqlx::query_as::<_, MaintenanceCostRow>(query)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }
}
