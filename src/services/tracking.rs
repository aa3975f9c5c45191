//! GPS tracking data assembly.

use chrono::{DateTime, Utc};

use crate::models::{NewRoutePoint, RoutePoint};
use crate::views::tracking::{TrackingData, TrackingPoint};

/// Samples served when the client does not ask for a specific window.
pub const DEFAULT_ROUTE_LIMIT: usize = 50;
/// Hard cap on samples per request.
pub const MAX_ROUTE_LIMIT: usize = 200;

/// Demo route: a loop around downtown Minneapolis, driven repeatedly.
pub const DEMO_ROUTE_WAYPOINTS: [(f64, f64); 8] = [
    (44.9778, -93.2650),
    (44.9812, -93.2718),
    (44.9854, -93.2673),
    (44.9846, -93.2584),
    (44.9801, -93.2531),
    (44.9752, -93.2562),
    (44.9730, -93.2641),
    (44.9749, -93.2707),
];

/// Clamp a client-supplied limit to the allowed window.
pub fn clamp_route_limit(limit: Option<usize>) -> usize {
    match limit {
        None | Some(0) => DEFAULT_ROUTE_LIMIT,
        Some(n) => n.min(MAX_ROUTE_LIMIT),
    }
}

/// Produce the demo sample for `step` along the loop.
///
/// Speed and impression counts vary deterministically so charts have
/// shape without a random source.
pub fn simulated_route_point(step: usize, timestamp: DateTime<Utc>) -> NewRoutePoint {
    let (latitude, longitude) = DEMO_ROUTE_WAYPOINTS[step % DEMO_ROUTE_WAYPOINTS.len()];
    NewRoutePoint {
        timestamp,
        latitude,
        longitude,
        speed: 20.0 + ((step * 7) % 23) as f64,
        estimated_impressions: 60 + ((step * 37) % 140) as i64,
        is_simulated: true,
    }
}

/// Assemble the tracking dataset from samples ordered newest-first.
pub fn build_tracking_data(points: &[RoutePoint]) -> TrackingData {
    let tracking_points: Vec<TrackingPoint> = points.iter().map(TrackingPoint::from).collect();
    let total_impressions = points.iter().map(|p| p.estimated_impressions).sum();
    let latest = tracking_points.first().cloned();
    let simulated = latest.as_ref().map(|p| p.is_simulated).unwrap_or(false);

    TrackingData {
        total_impressions,
        point_count: tracking_points.len(),
        latest,
        simulated,
        points: tracking_points,
    }
}
