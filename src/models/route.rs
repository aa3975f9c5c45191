use crate::api::RoutePointId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single GPS sample recorded while the van is on the road.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: RoutePointId,
    /// When the sample was taken
    pub timestamp: DateTime<Utc>,
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
    /// Speed in km/h at the time of the sample
    pub speed: f64,
    /// Vehicles estimated to have seen the van near this point
    pub estimated_impressions: i64,
    /// True for generated demo samples rather than live GPS data
    pub is_simulated: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a route point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoutePoint {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub estimated_impressions: i64,
    pub is_simulated: bool,
}

impl NewRoutePoint {
    pub fn new(
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        speed: f64,
        estimated_impressions: i64,
        is_simulated: bool,
    ) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        if estimated_impressions < 0 {
            return Err("Estimated impressions must not be negative".to_string());
        }
        Ok(Self {
            timestamp,
            latitude,
            longitude,
            speed,
            estimated_impressions,
            is_simulated,
        })
    }
}
