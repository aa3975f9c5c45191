use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Monthly operating cost breakdown keyed by category name.
pub type OperatingCosts = BTreeMap<String, f64>;

/// Published financial metrics for one month of operation.
///
/// At most one row exists per month; the newest row is the one shown on
/// the public transparency page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransparencyMetrics {
    pub id: i64,
    /// First day of the reported month
    pub month: NaiveDate,
    /// Total vehicle cost in USD
    pub vehicle_cost: f64,
    /// Fixed monthly financing payment in USD
    pub monthly_payment: f64,
    /// Panels currently paying toward the vehicle
    pub panels_funded_count: i32,
    /// Combined monthly revenue from funded panels in USD
    pub total_revenue: f64,
    pub operating_costs: OperatingCosts,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransparencyMetrics {
    /// Baseline estimates shown until a real metrics row is published.
    ///
    /// The vehicle cost and payment are pre-purchase projections; the
    /// operating cost categories are listed at zero so the breakdown is
    /// visible before real numbers exist.
    pub fn estimated() -> Self {
        let now = Utc::now();
        let today = now.date_naive();
        let month = today.with_day(1).unwrap_or(today);

        let mut operating_costs = OperatingCosts::new();
        operating_costs.insert("Vinyl".to_string(), 0.0);
        operating_costs.insert("charging".to_string(), 0.0);
        operating_costs.insert("maintenance".to_string(), 0.0);
        operating_costs.insert("software".to_string(), 0.0);

        Self {
            id: 0,
            month,
            vehicle_cost: 59_000.0,
            monthly_payment: 2_950.0,
            panels_funded_count: 0,
            total_revenue: 0.0,
            operating_costs,
            created_at: now,
            updated_at: now,
        }
    }
}
