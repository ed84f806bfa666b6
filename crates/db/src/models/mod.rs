//! Row structs and request DTOs for the fleet tables.

pub mod driver;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
