use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;

use super::schema::{panels, reservations, route_points, transparency_metrics};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = panels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PanelRow {
    pub panel_id: i64,
    pub panel_name: String,
    pub size: String,
    pub position: String,
    pub width_in: f64,
    pub height_in: f64,
    pub monthly_cost: f64,
    pub status: String,
    pub reserved_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = panels)]
pub struct NewPanelRow {
    pub panel_name: String,
    pub size: String,
    pub position: String,
    pub width_in: f64,
    pub height_in: f64,
    pub monthly_cost: f64,
    pub status: String,
    pub reserved_by: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReservationRow {
    pub reservation_id: i64,
    pub panel_id: Option<i64>,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub panel_size_requested: String,
    pub artwork_url: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub struct NewReservationRow {
    pub panel_id: Option<i64>,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub panel_size_requested: String,
    pub artwork_url: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = route_points)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoutePointRow {
    pub route_point_id: i64,
    pub recorded_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub estimated_impressions: i64,
    pub is_simulated: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = route_points)]
pub struct NewRoutePointRow {
    pub recorded_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub estimated_impressions: i64,
    pub is_simulated: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = transparency_metrics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TransparencyMetricsRow {
    pub metrics_id: i64,
    pub month: NaiveDate,
    pub vehicle_cost: f64,
    pub monthly_payment: f64,
    pub panels_funded_count: i32,
    pub total_revenue: f64,
    pub operating_costs: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
