//! Service layer for business logic.
//!
//! Pure computation lives here: catalog and report assembly from model
//! rows, reservation validation, and the write-endpoint rate limiter.
//! Orchestration that touches the repository sits in
//! [`crate::db::services`].

pub mod catalog;
pub mod rate_limit;
pub mod reservation;
pub mod tracking;
pub mod transparency;


pub use catalog::build_catalog_data;
pub use rate_limit::RateLimiter;
pub use reservation::validate_reservation;
pub use tracking::{build_tracking_data, simulated_route_point};
pub use transparency::build_funding_report;
