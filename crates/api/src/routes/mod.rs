pub mod auth;
pub mod drivers;
pub mod health;
pub mod maintenance;
pub mod stats;
pub mod trips;
pub mod vehicles;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /                              welcome (GET)
/// /health                        health check (GET)
///
/// /register                      create account (POST)
/// /token                         issue access token (POST, form-encoded)
///
/// /vehicles                      list, create
/// /vehicles/{id}                 update, delete
///
/// /drivers                       list, create
/// /drivers/{id}                  update, delete
///
/// /trips                         list, create (conflict-checked)
///
/// /maintenance                   list, create
/// /maintenance/vehicle/{id}      list records for one vehicle
/// /maintenance/{id}              update, delete
///
/// /stats/summary                 headline counts + rolling cost sum
/// /stats/monthly-trips           per-month trip counts
/// /stats/maintenance-costs       per-month maintenance cost sums
/// /stats/dashboard               combined dashboard payload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .nest("/vehicles", vehicles::router())
        .nest("/drivers", drivers::router())
        .nest("/trips", trips::router())
        .nest("/maintenance", maintenance::router())
        .nest("/stats", stats::router())
}
