//! Route definitions for the `/stats` dashboard endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET /summary            -> summary (headline counts + rolling cost sum)
/// GET /monthly-trips      -> monthly_trips (per-month trip counts, last 365 days)
/// GET /maintenance-costs  -> maintenance_costs (per-month cost sums, last 365 days)
/// GET /dashboard          -> dashboard (all of the above in one payload)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(stats::summary))
        .route("/monthly-trips", get(stats::monthly_trips))
        .route("/maintenance-costs", get(stats::maintenance_costs))
        .route("/dashboard", get(stats::dashboard))
}
