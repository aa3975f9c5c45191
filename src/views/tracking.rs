use crate::api::RoutePointId;
use crate::models::RoutePoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// GPS tracking types
// =========================================================

/// Single route sample as served to the tracking view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingPoint {
    pub route_point_id: RoutePointId,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub estimated_impressions: i64,
    pub is_simulated: bool,
}

impl From<&RoutePoint> for TrackingPoint {
    fn from(point: &RoutePoint) -> Self {
        Self {
            route_point_id: point.id,
            timestamp: point.timestamp,
            latitude: point.latitude,
            longitude: point.longitude,
            speed: point.speed,
            estimated_impressions: point.estimated_impressions,
            is_simulated: point.is_simulated,
        }
    }
}

/// Complete tracking dataset for the public GPS view.
///
/// `points` are newest-first; `latest` repeats the first point so the
/// current-location card does not have to index into the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingData {
    pub points: Vec<TrackingPoint>,
    pub total_impressions: i64,
    pub point_count: usize,
    pub latest: Option<TrackingPoint>,
    /// True when the newest sample is a generated demo sample
    pub simulated: bool,
}

pub const GET_TRACKING_DATA: &str = "get_tracking_data";
pub const STREAM_ROUTE_POINTS: &str = "stream_route_points";
