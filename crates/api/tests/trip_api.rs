//! HTTP-level integration tests for trip booking and conflict detection.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

/// Build a trip creation payload for the given resources and time window.
fn trip_payload(
    driver_id: i64,
    vehicle_id: i64,
    start_time: &str,
    end_time: &str,
) -> serde_json::Value {
    serde_json::json!({
        "driver_id": driver_id,
        "vehicle_id": vehicle_id,
        "start_location": "Depot",
        "end_location": "Airport",
        "start_time": start_time,
        "end_time": end_time,
    })
}

async fn create_trip(pool: &PgPool, payload: serde_json::Value) -> axum::http::StatusCode {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/trips", payload).await;
    response.status()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_trip_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/trips",
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["driver_id"], 1);
    assert_eq!(json["start_location"], "Depot");
    assert!(json["id"].is_number());
}

/// An overlapping window on the same driver is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overlap_same_driver_rejected(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same driver, different vehicle, overlapping window.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/trips",
        trip_payload(1, 2, "2026-06-01T09:00:00Z", "2026-06-01T11:00:00Z"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Driver or vehicle is already booked for this time period"
    );
}

/// An overlapping window on the same vehicle is rejected even with a
/// different driver.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_overlap_same_vehicle_rejected(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let status = create_trip(
        &pool,
        trip_payload(2, 1, "2026-06-01T09:30:00Z", "2026-06-01T12:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// A window contained entirely inside an existing booking conflicts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_contained_window_rejected(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T18:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let status = create_trip(
        &pool,
        trip_payload(1, 2, "2026-06-01T10:00:00Z", "2026-06-01T11:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Back-to-back windows do not conflict: one ends exactly when the next
/// starts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_back_to_back_windows_admitted(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T10:00:00Z", "2026-06-01T12:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Overlapping windows on disjoint driver AND vehicle are both admitted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_disjoint_resources_admitted(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let status = create_trip(
        &pool,
        trip_payload(2, 2, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// A window whose end precedes its start is rejected before any conflict
/// check runs.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inverted_window_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/trips",
        trip_payload(1, 1, "2026-06-01T10:00:00Z", "2026-06-01T08:00:00Z"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Trip end time must not be before its start time");
}

/// A zero-duration window is admitted and never conflicts with anything.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_zero_duration_window_admitted(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Instantaneous window inside the existing booking: the half-open
    // overlap test never matches an empty interval.
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T09:00:00Z", "2026-06-01T09:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// A persisted zero-duration trip never blocks later bookings either: the
/// empty-interval rule applies to existing rows, not just candidates.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_existing_zero_duration_trip_blocks_nothing(pool: PgPool) {
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T09:00:00Z", "2026-06-01T09:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Spanning window over the instant, same driver and vehicle.
    let status = create_trip(
        &pool,
        trip_payload(1, 1, "2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Listing returns trips ordered by start time.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_trips_ordered_by_start_time(pool: PgPool) {
    let windows = [
        ("2026-06-03T08:00:00Z", "2026-06-03T10:00:00Z"),
        ("2026-06-01T08:00:00Z", "2026-06-01T10:00:00Z"),
        ("2026-06-02T08:00:00Z", "2026-06-02T10:00:00Z"),
    ];
    for (i, (start, end)) in windows.iter().enumerate() {
        // Distinct drivers and vehicles so no window conflicts.
        let status = create_trip(&pool, trip_payload(i as i64 + 1, i as i64 + 1, start, end)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/trips").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let starts: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["start_time"].as_str().unwrap().to_string())
        .collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted, "trips are listed in start_time order");
}
