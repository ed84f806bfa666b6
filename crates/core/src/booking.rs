//! Trip booking admission rule.
//!
//! A candidate trip is rejected when any persisted trip shares its driver OR
//! its vehicle while the time intervals overlap. Overlap uses the half-open
//! test `a.start < b.end AND a.end > b.start`, so a trip that ends exactly
//! when another starts does not conflict, and a zero-duration trip
//! (`start == end`) never overlaps anything.

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// The scheduling-relevant slice of a trip: who, what, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    pub driver_id: DbId,
    pub vehicle_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

/// Half-open interval overlap test.
///
/// Empty intervals (`start == end`) overlap nothing: the bare
/// `a_start < b_end && a_end > b_start` test would report an instant strictly
/// inside the other interval as overlapping, so both intervals must be
/// non-empty before it applies.
pub fn intervals_overlap(
    a_start: Timestamp,
    a_end: Timestamp,
    b_start: Timestamp,
    b_end: Timestamp,
) -> bool {
    a_start < a_end && b_start < b_end && a_start < b_end && a_end > b_start
}

/// Two trips compete for a resource when they share a driver or a vehicle.
pub fn shares_resource(a: &TripWindow, b: &TripWindow) -> bool {
    a.driver_id == b.driver_id || a.vehicle_id == b.vehicle_id
}

/// Full booking-conflict predicate: shared resource AND overlapping time.
pub fn conflicts(a: &TripWindow, b: &TripWindow) -> bool {
    shares_resource(a, b)
        && intervals_overlap(a.start_time, a.end_time, b.start_time, b.end_time)
}

/// Validate a candidate time window before the conflict scan.
///
/// Inverted ranges (`end < start`) are rejected. `end == start` is allowed:
/// zero-duration trips are admissible and overlap nothing under the half-open
/// test.
pub fn validate_window(start_time: Timestamp, end_time: Timestamp) -> Result<(), CoreError> {
    if end_time < start_time {
        return Err(CoreError::Validation(
            "Trip end time must not be before its start time".into(),
        ));
    }
    Ok(())
}
