//! Route definitions for the `/maintenance` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Routes mounted at `/maintenance`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /vehicle/{vehicle_id}  -> list_by_vehicle
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(maintenance::list).post(maintenance::create))
        .route("/vehicle/{vehicle_id}", get(maintenance::list_by_vehicle))
        .route(
            "/{id}",
            put(maintenance::update).delete(maintenance::delete),
        )
}
