//! Dashboard monthly bucketing.
//!
//! Groups trip start times and maintenance costs into `"YYYY-MM"` calendar
//! buckets. Months with no data are omitted entirely (no zero-filling), and
//! buckets come out in ascending key order -- `"YYYY-MM"` sorts
//! lexicographically the same as chronologically, so a `BTreeMap` does the
//! ordering for free.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::Timestamp;

/// Trip count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTripCount {
    /// `"YYYY-MM"` bucket key.
    pub month: String,
    pub trip_count: i64,
}

/// Summed maintenance cost for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMaintenanceCost {
    /// `"YYYY-MM"` bucket key.
    pub month: String,
    pub cost: f64,
}

/// `"YYYY-MM"` bucket key for any date-like value.
pub fn month_key(date: &impl Datelike) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Count trips per calendar month of their start time.
pub fn monthly_trip_counts(start_times: &[Timestamp]) -> Vec<MonthlyTripCount> {
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
    for start in start_times {
        *buckets.entry(month_key(start)).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(month, trip_count)| MonthlyTripCount { month, trip_count })
        .collect()
}

/// Sum maintenance costs per calendar month of the maintenance date.
pub fn monthly_maintenance_costs(rows: &[(NaiveDate, f64)]) -> Vec<MonthlyMaintenanceCost> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for (date, cost) in rows {
        *buckets.entry(month_key(date)).or_insert(0.0) += cost;
    }
    buckets
        .into_iter()
        .map(|(month, cost)| MonthlyMaintenanceCost { month, cost })
        .collect()
}
