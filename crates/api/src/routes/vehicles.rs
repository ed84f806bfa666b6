//! Route definitions for the `/vehicles` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::vehicles;
use crate::state::AppState;

/// Routes mounted at `/vehicles`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicles::list).post(vehicles::create))
        .route("/{id}", put(vehicles::update).delete(vehicles::delete))
}
