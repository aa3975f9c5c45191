use crate::api::{PanelId, ReservationId};
use crate::models::PanelSize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a reservation request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ReservationStatus::Pending),
            "approved" => Ok(ReservationStatus::Approved),
            "rejected" => Ok(ReservationStatus::Rejected),
            other => Err(format!("Unknown reservation status: {}", other)),
        }
    }
}

/// A stored reservation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// Specific panel the advertiser picked, if any
    pub panel_id: Option<PanelId>,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub panel_size_requested: PanelSize,
    /// Artwork preview as a `data:image/...` URL, if one was uploaded
    pub artwork_url: Option<String>,
    pub notes: Option<String>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new reservation.
///
/// The status is not part of the payload: repositories assign `pending`
/// to every new row and the review workflow moves it from there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    #[serde(default)]
    pub panel_id: Option<PanelId>,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub panel_size_requested: PanelSize,
    #[serde(default)]
    pub artwork_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_status_round_trip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Approved,
            ReservationStatus::Rejected,
        ] {
            let parsed: ReservationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_reservation_status_rejects_unknown() {
        assert!("cancelled".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_new_reservation_optional_fields_default() {
        let json = r#"{
            "business_name": "Corner Bakery",
            "contact_name": "Dana",
            "email": "dana@cornerbakery.test",
            "panel_size_requested": "small"
        }"#;
        let req: NewReservation = serde_json::from_str(json).unwrap();
        assert_eq!(req.panel_id, None);
        assert_eq!(req.phone, None);
        assert_eq!(req.artwork_url, None);
        assert_eq!(req.notes, None);
        assert_eq!(req.panel_size_requested, PanelSize::Small);
    }
}
