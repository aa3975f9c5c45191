pub mod catalog;
pub mod reserve;
pub mod tracking;
pub mod transparency;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all view module constants are accessible
        assert_eq!(super::catalog::LIST_PANELS, "list_panels");
        assert_eq!(super::reserve::SUBMIT_RESERVATION, "submit_reservation");
        assert_eq!(super::reserve::UPLOAD_ARTWORK, "upload_artwork");
        assert_eq!(super::tracking::GET_TRACKING_DATA, "get_tracking_data");
        assert_eq!(super::tracking::STREAM_ROUTE_POINTS, "stream_route_points");
        assert_eq!(
            super::transparency::GET_FUNDING_REPORT,
            "get_funding_report"
        );
    }
}
