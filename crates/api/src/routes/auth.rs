//! Route definitions for account registration and token issuance.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Authentication routes, mounted at the root.
///
/// ```text
/// POST /register -> register (JSON body)
/// POST /token    -> token (form-encoded body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/token", post(auth::token))
}
