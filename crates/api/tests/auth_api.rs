//! HTTP-level integration tests for account registration and token issuance.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_form, post_json};
use sqlx::PgPool;

/// Registering a new account returns 201 with a confirmation message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "alice", "password": "s3cret-pw" });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User created successfully");
}

/// Registering the same username twice returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "bob", "password": "first-pw" });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "bob", "password": "second-pw" });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Username already registered");
}

/// A registered user can exchange form-encoded credentials for a bearer token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "carol", "password": "carol-pw" });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_form(app, "/token", "username=carol&password=carol-pw").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
}

/// Wrong password returns 401 with the same message as an unknown user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "dave", "password": "real-pw" });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_form(app, "/token", "username=dave&password=wrong-pw").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Incorrect username or password");
}

/// Unknown username returns 401 with the same message as a wrong password,
/// so the response does not reveal which accounts exist.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_form(app, "/token", "username=ghost&password=whatever").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Incorrect username or password");
}
