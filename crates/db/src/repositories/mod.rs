//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod driver_repo;
pub mod maintenance_repo;
pub mod stats_repo;
pub mod trip_repo;
pub mod user_repo;
pub mod vehicle_repo;

pub use driver_repo::DriverRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use stats_repo::StatsRepo;
pub use trip_repo::TripRepo;
pub use user_repo::UserRepo;
pub use vehicle_repo::VehicleRepo;
