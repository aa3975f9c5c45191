use serde::{Deserialize, Serialize};

// =========================================================
// Reservation submission types
// =========================================================

/// Receipt returned by the artwork upload endpoint.
///
/// `accepted: false` is the quiet-rejection path for files that are not
/// images; the payload fields are absent in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkReceipt {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl ArtworkReceipt {
    pub fn rejected() -> Self {
        Self {
            accepted: false,
            data_url: None,
            content_type: None,
            size_bytes: None,
            checksum: None,
        }
    }
}

pub const SUBMIT_RESERVATION: &str = "submit_reservation";
pub const UPLOAD_ARTWORK: &str = "upload_artwork";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_receipt_omits_payload_fields() {
        let receipt = ArtworkReceipt::rejected();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["accepted"], false);
        assert!(json.get("data_url").is_none());
        assert!(json.get("checksum").is_none());
    }

    #[test]
    fn test_accepted_receipt_keeps_payload_fields() {
        let receipt = ArtworkReceipt {
            accepted: true,
            data_url: Some("data:image/png;base64,AAAA".to_string()),
            content_type: Some("image/png".to_string()),
            size_bytes: Some(3),
            checksum: Some("abc123".to_string()),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["accepted"], true);
        assert_eq!(json["size_bytes"], 3);
        assert_eq!(json["content_type"], "image/png");
    }

    #[test]
    fn test_const_values() {
        assert_eq!(SUBMIT_RESERVATION, "submit_reservation");
        assert_eq!(UPLOAD_ARTWORK, "upload_artwork");
    }
}
