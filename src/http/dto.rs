//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The catalog, tracking and transparency payloads are re-exported from the
//! views module since they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Catalog
    CatalogData, PanelInfo, TierInfo,
    // Tracking
    TrackingData, TrackingPoint,
    // Transparency
    FundingReport,
    // Artwork upload
    ArtworkReceipt,
};
pub use crate::models::NewReservation;

/// Query parameters for the routes endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutesQuery {
    /// Number of samples to return (clamped server-side)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for the reservation form page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReservePageQuery {
    /// Set after a successful submission to render the thank-you state
    #[serde(default)]
    pub submitted: Option<u8>,
}

/// Response for a stored reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    /// Assigned reservation id
    pub reservation_id: i64,
    /// Stored status, always "pending" on creation
    pub status: String,
    /// Confirmation message for the client
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_query_defaults() {
        let query: RoutesQuery = serde_json::from_str("{}").unwrap();
        assert!(query.limit.is_none());

        let query: RoutesQuery = serde_json::from_str(r#"{"limit": 25}"#).unwrap();
        assert_eq!(query.limit, Some(25));
    }

    #[test]
    fn test_rejected_upload_serializes_compactly() {
        let response = ArtworkReceipt::rejected();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accepted\":false"));
        assert!(!json.contains("data_url"));
        assert!(!json.contains("checksum"));
    }

    #[test]
    fn test_health_response_roundtrip() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "v1".to_string(),
            database: "connected".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.database, "connected");
    }
}
