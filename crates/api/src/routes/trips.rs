//! Route definitions for the `/trips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::trips;
use crate::state::AppState;

/// Routes mounted at `/trips`.
///
/// Creation runs the booking conflict check before inserting; an overlap on
/// the same driver or vehicle is rejected with 400.
///
/// ```text
/// GET    /   -> list
/// POST   /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(trips::list).post(trips::create))
}
