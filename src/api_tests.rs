#[cfg(test)]
mod tests {
    use crate::api::{PanelId, ReservationId, RoutePointId};

    #[test]
    fn test_panel_id_new() {
        let id = PanelId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_panel_id_equality() {
        let id1 = PanelId::new(100);
        let id2 = PanelId::new(100);
        let id3 = PanelId::new(101);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_panel_id_ordering() {
        let id1 = PanelId::new(1);
        let id2 = PanelId::new(2);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_panel_id_display() {
        let id = PanelId::new(7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_panel_id_from_i64() {
        let id = PanelId(999);
        assert_eq!(id.0, 999);
        assert_eq!(i64::from(id), 999);
    }

    #[test]
    fn test_reservation_id_new() {
        let id = ReservationId::new(55);
        assert_eq!(id.value(), 55);
    }

    #[test]
    fn test_reservation_id_equality() {
        let id1 = ReservationId::new(200);
        let id2 = ReservationId::new(200);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_route_point_id_new() {
        let id = RoutePointId::new(77);
        assert_eq!(id.value(), 77);
    }

    #[test]
    fn test_route_point_id_equality() {
        let id1 = RoutePointId::new(300);
        let id2 = RoutePointId::new(300);
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_all_ids_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(PanelId::new(1));
        set.insert(PanelId::new(2));
        set.insert(PanelId::new(1)); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_panel_id_zero() {
        let id = PanelId::new(0);
        assert_eq!(id.value(), 0);
    }
}
