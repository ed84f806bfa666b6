//! Route definitions for the `/drivers` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::drivers;
use crate::state::AppState;

/// Routes mounted at `/drivers`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(drivers::list).post(drivers::create))
        .route("/{id}", put(drivers::update).delete(drivers::delete))
}
