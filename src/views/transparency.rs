use crate::models::OperatingCosts;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Financial transparency types
// =========================================================

/// Funding math for the public transparency page.
///
/// Either derived from the newest published metrics row or, before any
/// row exists, from the pre-purchase estimates (`estimated: true`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingReport {
    /// First day of the reported month
    pub month: NaiveDate,
    pub vehicle_cost: f64,
    pub monthly_payment: f64,
    /// Total ad positions on the vehicle
    pub total_panels: usize,
    /// Panels currently paying toward the vehicle
    pub panels_funded: i32,
    /// Panels still open
    pub panels_available: i64,
    pub total_revenue: f64,
    /// Share of the monthly payment covered by revenue, 0-100
    pub funding_percent: f64,
    /// Whole months until the vehicle is paid off at the current payment
    pub months_to_full_funding: i64,
    pub operating_costs: OperatingCosts,
    pub total_operating_costs: f64,
    /// True when no metrics row has been published yet
    pub estimated: bool,
}

pub const GET_FUNDING_REPORT: &str = "get_funding_report";
