//! Handlers for the `/stats` dashboard endpoints.
//!
//! Counts and the rolling cost sum come straight from SQL aggregates in
//! [`StatsRepo`]; the monthly bucket endpoints fetch the raw rows inside the
//! 365-day window and fold them through `fleet_core::reporting`.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, NaiveDate, Utc};
use fleet_core::reporting::{
    monthly_maintenance_costs, monthly_trip_counts, MonthlyMaintenanceCost, MonthlyTripCount,
};
use fleet_core::types::Timestamp;
use fleet_db::repositories::StatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Length of the rolling reporting window.
const ROLLING_WINDOW_DAYS: i64 = 365;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Headline numbers for the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_vehicles: i64,
    pub total_drivers: i64,
    pub total_trips: i64,
    /// Trips whose start time falls in the current calendar month.
    pub trips_this_month: i64,
    /// Sum of maintenance costs over the rolling 365-day window.
    pub maintenance_costs: f64,
}

/// Combined response for `GET /stats/dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub monthly_trips: Vec<MonthlyTripCount>,
    pub maintenance_costs: Vec<MonthlyMaintenanceCost>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn rolling_cutoff(now: Timestamp) -> Timestamp {
    now - Duration::days(ROLLING_WINDOW_DAYS)
}

fn rolling_cutoff_date(now: Timestamp) -> NaiveDate {
    rolling_cutoff(now).date_naive()
}

async fn build_stats(state: &AppState, now: Timestamp) -> AppResult<DashboardStats> {
    let counts = StatsRepo::total_counts(&state.pool).await?;
    let trips_this_month = StatsRepo::trips_in_month_of(&state.pool, now).await?;
    let maintenance_costs =
        StatsRepo::maintenance_cost_since(&state.pool, rolling_cutoff_date(now)).await?;

    Ok(DashboardStats {
        total_vehicles: counts.total_vehicles,
        total_drivers: counts.total_drivers,
        total_trips: counts.total_trips,
        trips_this_month,
        maintenance_costs,
    })
}

async fn build_monthly_trips(
    state: &AppState,
    now: Timestamp,
) -> AppResult<Vec<MonthlyTripCount>> {
    let starts = StatsRepo::trip_starts_since(&state.pool, rolling_cutoff(now)).await?;
    Ok(monthly_trip_counts(&starts))
}

async fn build_monthly_costs(
    state: &AppState,
    now: Timestamp,
) -> AppResult<Vec<MonthlyMaintenanceCost>> {
    let rows = StatsRepo::maintenance_costs_since(&state.pool, rolling_cutoff_date(now)).await?;
    let pairs: Vec<_> = rows
        .into_iter()
        .map(|r| (r.maintenance_date, r.cost))
        .collect();
    Ok(monthly_maintenance_costs(&pairs))
}

/// GET /stats/summary
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = build_stats(&state, Utc::now()).await?;
    Ok(Json(stats))
}

/// GET /stats/monthly-trips
pub async fn monthly_trips(State(state): State<AppState>) -> AppResult<Json<Vec<MonthlyTripCount>>> {
    let buckets = build_monthly_trips(&state, Utc::now()).await?;
    Ok(Json(buckets))
}

/// GET /stats/maintenance-costs
pub async fn maintenance_costs(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MonthlyMaintenanceCost>>> {
    let buckets = build_monthly_costs(&state, Utc::now()).await?;
    Ok(Json(buckets))
}

/// GET /stats/dashboard
///
/// One combined payload so the dashboard loads with a single request.
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let now = Utc::now();
    let stats = build_stats(&state, now).await?;
    let monthly_trips = build_monthly_trips(&state, now).await?;
    let maintenance_costs = build_monthly_costs(&state, now).await?;

    Ok(Json(DashboardSummary {
        stats,
        monthly_trips,
        maintenance_costs,
    }))
}
