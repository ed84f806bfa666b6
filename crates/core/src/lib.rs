//! Domain logic for the fleet manager.
//!
//! This crate has zero internal dependencies so the booking and reporting
//! rules can be used (and unit tested) without a database or HTTP stack.

pub mod booking;
pub mod error;
pub mod reporting;
pub mod types;
