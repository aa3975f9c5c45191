//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types for the HTTP API. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::views::catalog::CatalogData;
pub use crate::views::catalog::PanelInfo;
pub use crate::views::catalog::TierInfo;
pub use crate::views::reserve::ArtworkReceipt;
pub use crate::views::tracking::TrackingData;
pub use crate::views::tracking::TrackingPoint;
pub use crate::views::transparency::FundingReport;

use serde::{Deserialize, Serialize};

/// Panel identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PanelId(pub i64);

/// Reservation identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub i64);

/// Route point identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutePointId(pub i64);

impl PanelId {
    pub fn new(value: i64) -> Self {
        PanelId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ReservationId {
    pub fn new(value: i64) -> Self {
        ReservationId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RoutePointId {
    pub fn new(value: i64) -> Self {
        RoutePointId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for RoutePointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PanelId> for i64 {
    fn from(id: PanelId) -> Self {
        id.0
    }
}

pub use crate::models::NewReservation;
pub use crate::models::OperatingCosts;
pub use crate::models::Panel;
pub use crate::models::PanelDimensions;
pub use crate::models::PanelSize;
pub use crate::models::PanelStatus;
pub use crate::models::Reservation;
pub use crate::models::ReservationStatus;
pub use crate::models::RoutePoint;
pub use crate::models::TransparencyMetrics;

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
