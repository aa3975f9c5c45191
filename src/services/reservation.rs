//! Reservation request validation.
//!
//! Pure checks only; the insert itself is orchestrated by
//! [`crate::db::services::submit_reservation`] so a validation failure
//! can never leave a partial row behind.

use crate::models::NewReservation;
use crate::overlay::artwork::{ArtworkImage, MAX_ARTWORK_BYTES};

/// Longest accepted free-text notes field, in characters.
pub const MAX_NOTES_CHARS: usize = 2_000;

/// Validate a reservation request without touching the database.
///
/// Required: business name, contact name and a plausible email. The
/// artwork, when present, must be an inline `data:image/...` URL within
/// the preview size cap.
pub fn validate_reservation(request: &NewReservation) -> Result<(), String> {
    if request.business_name.trim().is_empty() {
        return Err("Business name is required".to_string());
    }
    if request.contact_name.trim().is_empty() {
        return Err("Contact name is required".to_string());
    }
    if !is_plausible_email(&request.email) {
        return Err("A valid email address is required".to_string());
    }
    if let Some(notes) = &request.notes {
        if notes.chars().count() > MAX_NOTES_CHARS {
            return Err(format!(
                "Notes must stay under {} characters",
                MAX_NOTES_CHARS
            ));
        }
    }
    if let Some(url) = &request.artwork_url {
        match ArtworkImage::from_data_url(url) {
            Some(image) if image.size_bytes() <= MAX_ARTWORK_BYTES => {}
            Some(_) => return Err("Artwork image is too large".to_string()),
            None => {
                return Err("Artwork must be an inline data: URL for an image".to_string());
            }
        }
    }
    Ok(())
}

/// Minimal shape check: something before a single `@`, and a dotted
/// domain after it. Deliverability is confirmed by the follow-up
/// contact, not here.
fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PanelSize;

    fn valid_request() -> NewReservation {
        NewReservation {
            panel_id: None,
            business_name: "Corner Bakery".to_string(),
            contact_name: "Dana Reyes".to_string(),
            email: "dana@cornerbakery.test".to_string(),
            phone: Some("(555) 123-4567".to_string()),
            panel_size_requested: PanelSize::Large,
            artwork_url: None,
            notes: Some("North side routes preferred".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_reservation(&valid_request()).is_ok());
    }

    #[test]
    fn test_blank_business_name_rejected() {
        let mut request = valid_request();
        request.business_name = "   ".to_string();
        let err = validate_reservation(&request).unwrap_err();
        assert!(err.contains("Business name"));
    }

    #[test]
    fn test_blank_contact_name_rejected() {
        let mut request = valid_request();
        request.contact_name = String::new();
        assert!(validate_reservation(&request).is_err());
    }

    #[test]
    fn test_bad_emails_rejected() {
        for email in ["", "dana", "dana@", "@bakery.test", "dana@bakery", "dana@.test"] {
            let mut request = valid_request();
            request.email = email.to_string();
            assert!(
                validate_reservation(&request).is_err(),
                "accepted bad email {:?}",
                email
            );
        }
    }

    #[test]
    fn test_overlong_notes_rejected() {
        let mut request = valid_request();
        request.notes = Some("x".repeat(MAX_NOTES_CHARS + 1));
        assert!(validate_reservation(&request).is_err());
    }

    #[test]
    fn test_artwork_must_be_image_data_url() {
        let mut request = valid_request();
        request.artwork_url = Some("https://example.test/logo.png".to_string());
        assert!(validate_reservation(&request).is_err());

        request.artwork_url = Some("data:text/plain;base64,aGVsbG8=".to_string());
        assert!(validate_reservation(&request).is_err());

        request.artwork_url = Some("data:image/png;base64,iVBORw0KGgo=".to_string());
        assert!(validate_reservation(&request).is_ok());
    }
}
