//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `fleet_db` and map
//! errors via [`crate::error::AppError`]. Trip creation additionally runs
//! the booking admission check; the stats handlers compose the aggregate
//! queries with `fleet_core::reporting`.

pub mod auth;
pub mod drivers;
pub mod maintenance;
pub mod stats;
pub mod trips;
pub mod vehicles;
