//! Funding report assembly.

use crate::models::TransparencyMetrics;
use crate::services::catalog::total_positions;
use crate::views::transparency::FundingReport;

/// Build the funding report from the newest published metrics row, or
/// from the pre-purchase estimates when none exists yet.
pub fn build_funding_report(metrics: Option<TransparencyMetrics>) -> FundingReport {
    let estimated = metrics.is_none();
    let metrics = metrics.unwrap_or_else(TransparencyMetrics::estimated);

    let total_panels = total_positions();
    let funding_percent = if metrics.monthly_payment > 0.0 {
        ((metrics.total_revenue / metrics.monthly_payment) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let months_to_full_funding = if metrics.monthly_payment > 0.0 {
        (metrics.vehicle_cost / metrics.monthly_payment).ceil() as i64
    } else {
        0
    };
    let total_operating_costs = metrics.operating_costs.values().sum();
    let panels_available = (total_panels as i64 - metrics.panels_funded_count as i64).max(0);

    FundingReport {
        month: metrics.month,
        vehicle_cost: metrics.vehicle_cost,
        monthly_payment: metrics.monthly_payment,
        total_panels,
        panels_funded: metrics.panels_funded_count,
        panels_available,
        total_revenue: metrics.total_revenue,
        funding_percent,
        months_to_full_funding,
        operating_costs: metrics.operating_costs,
        total_operating_costs,
        estimated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperatingCosts;
    use chrono::{NaiveDate, Utc};

    fn published(revenue: f64, funded: i32) -> TransparencyMetrics {
        let mut operating_costs = OperatingCosts::new();
        operating_costs.insert("Vinyl".to_string(), 180.0);
        operating_costs.insert("charging".to_string(), 220.0);
        TransparencyMetrics {
            id: 1,
            month: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            vehicle_cost: 59_000.0,
            monthly_payment: 2_950.0,
            panels_funded_count: funded,
            total_revenue: revenue,
            operating_costs,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_falls_back_to_estimates() {
        let report = build_funding_report(None);

        assert!(report.estimated);
        assert_eq!(report.vehicle_cost, 59_000.0);
        assert_eq!(report.monthly_payment, 2_950.0);
        assert_eq!(report.funding_percent, 0.0);
        assert_eq!(report.months_to_full_funding, 20);
        assert_eq!(report.total_panels, 15);
        assert_eq!(report.panels_available, 15);
        assert_eq!(report.total_operating_costs, 0.0);
    }

    #[test]
    fn test_report_from_published_row() {
        let report = build_funding_report(Some(published(1_475.0, 6)));

        assert!(!report.estimated);
        assert_eq!(report.funding_percent, 50.0);
        assert_eq!(report.panels_funded, 6);
        assert_eq!(report.panels_available, 9);
        assert_eq!(report.total_operating_costs, 400.0);
    }

    #[test]
    fn test_funding_percent_clamps_at_hundred() {
        let report = build_funding_report(Some(published(10_000.0, 15)));
        assert_eq!(report.funding_percent, 100.0);
        assert_eq!(report.panels_available, 0);
    }

    #[test]
    fn test_funded_count_above_total_does_not_go_negative() {
        let report = build_funding_report(Some(published(0.0, 40)));
        assert_eq!(report.panels_available, 0);
    }

    #[test]
    fn test_months_round_up() {
        let mut metrics = published(0.0, 0);
        metrics.vehicle_cost = 59_001.0;
        let report = build_funding_report(Some(metrics));
        assert_eq!(report.months_to_full_funding, 21);
    }
}
