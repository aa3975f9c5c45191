use crate::api::PanelId;
use crate::models::{Panel, PanelSize};
use serde::{Deserialize, Serialize};

// =========================================================
// Panel catalog types
// =========================================================

/// Single panel as listed in the public catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelInfo {
    pub panel_id: PanelId,
    pub name: String,
    pub size: PanelSize,
    pub position: String,
    pub dimensions_label: String,
    pub monthly_cost: f64,
    pub available: bool,
    pub reserved_by: Option<String>,
}

impl From<&Panel> for PanelInfo {
    fn from(panel: &Panel) -> Self {
        Self {
            panel_id: panel.id,
            name: panel.name.clone(),
            size: panel.size,
            position: panel.position.clone(),
            dimensions_label: panel.dimensions.label(),
            monthly_cost: panel.monthly_cost,
            available: panel.is_available(),
            reserved_by: panel.reserved_by.clone(),
        }
    }
}

/// One pricing tier with its availability counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierInfo {
    pub size: PanelSize,
    pub name: String,
    /// Total positions in this tier on the vehicle
    pub count: usize,
    /// Positions still open for reservation
    pub available: usize,
    pub dimensions_label: String,
    pub monthly_cost: f64,
    /// Mounting positions covered by this tier
    pub positions: Vec<String>,
    /// Marketing highlight ("Most Visible") shown on one tier
    pub highlight: bool,
}

/// Complete catalog dataset: all panels cheapest-first plus the three
/// pricing tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub panels: Vec<PanelInfo>,
    pub tiers: Vec<TierInfo>,
    pub total_count: usize,
    pub available_count: usize,
}

pub const LIST_PANELS: &str = "list_panels";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_info_clone() {
        let tier = TierInfo {
            size: PanelSize::Small,
            name: "Small Panels".to_string(),
            count: 3,
            available: 3,
            dimensions_label: "12\" x 18\"".to_string(),
            monthly_cost: 120.41,
            positions: vec!["Front Bumper".to_string()],
            highlight: false,
        };
        let cloned = tier.clone();
        assert_eq!(cloned.count, 3);
        assert_eq!(cloned.monthly_cost, 120.41);
    }

    #[test]
    fn test_panel_info_debug() {
        let info = PanelInfo {
            panel_id: PanelId::new(1),
            name: "Drivers Door".to_string(),
            size: PanelSize::Large,
            position: "drivers-door".to_string(),
            dimensions_label: "36\" x 48\"".to_string(),
            monthly_cost: 240.82,
            available: true,
            reserved_by: None,
        };
        let debug_str = format!("{:?}", info);
        assert!(debug_str.contains("PanelInfo"));
    }

    #[test]
    fn test_const_values() {
        assert_eq!(LIST_PANELS, "list_panels");
    }
}
