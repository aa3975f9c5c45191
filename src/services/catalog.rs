//! Panel catalog assembly.

use crate::models::{Panel, PanelDimensions, PanelSize};
use crate::views::catalog::{CatalogData, PanelInfo, TierInfo};

/// Static description of one pricing tier.
pub struct TierTemplate {
    pub size: PanelSize,
    pub name: &'static str,
    pub count: usize,
    pub dimensions: PanelDimensions,
    pub monthly_cost: f64,
    pub positions: &'static [&'static str],
    pub highlight: bool,
}

/// The three tiers offered on the van.
///
/// Pricing is the projection for a $70,000 vehicle financed over 24
/// months; final pricing is locked in once the purchase completes.
pub const TIER_TEMPLATES: [TierTemplate; 3] = [
    TierTemplate {
        size: PanelSize::Small,
        name: "Small Panels",
        count: 3,
        dimensions: PanelDimensions {
            width: 12.0,
            height: 18.0,
        },
        monthly_cost: 120.41,
        positions: &[
            "Front Bumper",
            "Rear 1/4 Panel Glass Driver",
            "Rear 1/4 Panel Glass Passenger",
        ],
        highlight: false,
    },
    TierTemplate {
        size: PanelSize::Medium,
        name: "Medium Panel",
        count: 5,
        dimensions: PanelDimensions {
            width: 24.0,
            height: 36.0,
        },
        monthly_cost: 180.62,
        positions: &[
            "Rear 1/4 Panel Driver",
            "Rear 1/4 Panel Passenger",
            "Rear 1/4 Panel Glass Driver",
            "Rear 1/4 Panel Glass Passenger",
            "Rear Bumper",
        ],
        highlight: false,
    },
    TierTemplate {
        size: PanelSize::Large,
        name: "Large Panels",
        count: 7,
        dimensions: PanelDimensions {
            width: 36.0,
            height: 48.0,
        },
        monthly_cost: 240.82,
        positions: &[
            "Drivers Door",
            "Passenger Door",
            "Rear Drivers Door",
            "Rear Passenger Door",
            "Rear Driver Door Glass",
            "Rear Passenger Door Glass",
            "Trunk Glass",
        ],
        highlight: true,
    },
];

/// Total ad positions across all tiers.
pub fn total_positions() -> usize {
    TIER_TEMPLATES.iter().map(|t| t.count).sum()
}

/// Build a stable placement slug, e.g. `large-drivers-door`.
///
/// The size prefix keeps slugs unique: some glass placements appear in
/// more than one tier.
pub fn position_slug(size: PanelSize, label: &str) -> String {
    let mut slug = String::from(size.as_str());
    for part in label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|p| !p.is_empty())
    {
        slug.push('-');
        slug.push_str(&part.to_ascii_lowercase());
    }
    slug
}

/// Monthly cost for a tier, from the templates.
pub fn tier_monthly_cost(size: PanelSize) -> f64 {
    TIER_TEMPLATES
        .iter()
        .find(|t| t.size == size)
        .map(|t| t.monthly_cost)
        .unwrap_or(0.0)
}

/// Assemble the catalog from the stored panels.
///
/// Panels are listed cheapest-first. Tier availability is counted from
/// panel status; an empty panel table yields zero availability, not an
/// error.
pub fn build_catalog_data(panels: &[Panel]) -> CatalogData {
    let mut sorted: Vec<&Panel> = panels.iter().collect();
    sorted.sort_by(|a, b| {
        a.monthly_cost
            .partial_cmp(&b.monthly_cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let panel_infos: Vec<PanelInfo> = sorted.into_iter().map(PanelInfo::from).collect();
    let available_count = panels.iter().filter(|p| p.is_available()).count();

    let tiers = TIER_TEMPLATES
        .iter()
        .map(|template| {
            let available = panels
                .iter()
                .filter(|p| p.size == template.size && p.is_available())
                .count();
            TierInfo {
                size: template.size,
                name: template.name.to_string(),
                count: template.count,
                available: available.min(template.count),
                dimensions_label: template.dimensions.label(),
                monthly_cost: template.monthly_cost,
                positions: template.positions.iter().map(|p| p.to_string()).collect(),
                highlight: template.highlight,
            }
        })
        .collect();

    CatalogData {
        panels: panel_infos,
        tiers,
        total_count: panels.len(),
        available_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PanelId;
    use crate::models::PanelStatus;
    use chrono::Utc;

    fn panel(id: i64, size: PanelSize, cost: f64, status: PanelStatus) -> Panel {
        Panel {
            id: PanelId::new(id),
            name: format!("Panel {}", id),
            size,
            position: format!("position-{}", id),
            dimensions: PanelDimensions::new(12.0, 18.0),
            monthly_cost: cost,
            status,
            reserved_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_positions_is_fifteen() {
        assert_eq!(total_positions(), 15);
    }

    #[test]
    fn test_position_slug() {
        assert_eq!(
            position_slug(PanelSize::Large, "Drivers Door"),
            "large-drivers-door"
        );
        assert_eq!(
            position_slug(PanelSize::Small, "Rear 1/4 Panel Glass Driver"),
            "small-rear-1-4-panel-glass-driver"
        );
    }

    #[test]
    fn test_tier_monthly_costs() {
        assert_eq!(tier_monthly_cost(PanelSize::Small), 120.41);
        assert_eq!(tier_monthly_cost(PanelSize::Medium), 180.62);
        assert_eq!(tier_monthly_cost(PanelSize::Large), 240.82);
    }

    #[test]
    fn test_catalog_sorts_panels_by_cost_ascending() {
        let panels = vec![
            panel(1, PanelSize::Large, 240.82, PanelStatus::Available),
            panel(2, PanelSize::Small, 120.41, PanelStatus::Available),
            panel(3, PanelSize::Medium, 180.62, PanelStatus::Available),
        ];
        let catalog = build_catalog_data(&panels);

        let costs: Vec<f64> = catalog.panels.iter().map(|p| p.monthly_cost).collect();
        assert_eq!(costs, vec![120.41, 180.62, 240.82]);
    }

    #[test]
    fn test_catalog_counts_tier_availability_from_status() {
        let panels = vec![
            panel(1, PanelSize::Small, 120.41, PanelStatus::Available),
            panel(2, PanelSize::Small, 120.41, PanelStatus::Reserved),
            panel(3, PanelSize::Large, 240.82, PanelStatus::Active),
        ];
        let catalog = build_catalog_data(&panels);

        let small = catalog
            .tiers
            .iter()
            .find(|t| t.size == PanelSize::Small)
            .unwrap();
        assert_eq!(small.available, 1);
        assert_eq!(small.count, 3);

        let large = catalog
            .tiers
            .iter()
            .find(|t| t.size == PanelSize::Large)
            .unwrap();
        assert_eq!(large.available, 0);
        assert!(large.highlight);
    }

    #[test]
    fn test_catalog_from_empty_table() {
        let catalog = build_catalog_data(&[]);

        assert_eq!(catalog.total_count, 0);
        assert_eq!(catalog.available_count, 0);
        assert_eq!(catalog.tiers.len(), 3);
        assert!(catalog.tiers.iter().all(|t| t.available == 0));
    }

    #[test]
    fn test_tier_positions_listed_in_order() {
        let catalog = build_catalog_data(&[]);
        let medium = catalog
            .tiers
            .iter()
            .find(|t| t.size == PanelSize::Medium)
            .unwrap();
        assert_eq!(medium.positions.len(), 5);
        assert_eq!(medium.positions[0], "Rear 1/4 Panel Driver");
        assert_eq!(medium.positions[4], "Rear Bumper");
    }
}
