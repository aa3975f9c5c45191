//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap and Vec structures, providing fast, deterministic,
//! and isolated execution.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{PanelId, ReservationId, RoutePointId};
use crate::db::repository::*;
use crate::models::{
    NewReservation, NewRoutePoint, Panel, PanelStatus, Reservation, ReservationStatus, RoutePoint,
    TransparencyMetrics,
};
use crate::services::catalog::{position_slug, TIER_TEMPLATES};
use crate::services::tracking::{simulated_route_point, DEMO_ROUTE_WAYPOINTS};

const DEMO_ROUTE_LAPS: usize = 3;
const DEMO_SAMPLE_INTERVAL_MINUTES: i64 = 5;

/// In-memory local repository.
///
/// This implementation stores all data in memory using HashMaps and Vecs,
/// making it ideal for unit tests and local development that need isolation
/// and speed.
///
/// # Example
/// ```ignore
/// use vanads::db::repositories::LocalRepository;
///
/// #[tokio::test]
/// async fn test_panel_inventory() {
///     let repo = LocalRepository::with_demo_data();
///
///     let panels = repo.list_panels().await.unwrap();
///     assert_eq!(panels.len(), 15);
/// }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    panels: HashMap<PanelId, Panel>,
    reservations: HashMap<ReservationId, Reservation>,
    route_points: Vec<RoutePoint>,
    metrics: Vec<TransparencyMetrics>,

    // ID counters
    next_panel_id: i64,
    next_reservation_id: i64,
    next_route_point_id: i64,
    next_metrics_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            panels: HashMap::new(),
            reservations: HashMap::new(),
            route_points: Vec::new(),
            metrics: Vec::new(),
            next_panel_id: 1,
            next_reservation_id: 1,
            next_route_point_id: 1,
            next_metrics_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a local repository seeded with the demo dataset: the full
    /// 15-panel inventory and a simulated GPS route. No transparency
    /// metrics are seeded, so the site falls back to launch estimates.
    pub fn with_demo_data() -> Self {
        let repo = Self::new();
        repo.seed_panels();
        repo.seed_route_points();
        repo
    }

    fn seed_panels(&self) {
        let now = Utc::now();
        for template in TIER_TEMPLATES.iter() {
            for label in template.positions.iter() {
                self.store_panel_impl(Panel {
                    id: PanelId::new(0),
                    name: (*label).to_string(),
                    size: template.size,
                    position: position_slug(template.size, label),
                    dimensions: template.dimensions,
                    monthly_cost: template.monthly_cost,
                    status: PanelStatus::Available,
                    reserved_by: None,
                    created_at: now,
                    updated_at: now,
                });
            }
        }
    }

    fn seed_route_points(&self) {
        let now = Utc::now();
        let total = DEMO_ROUTE_WAYPOINTS.len() * DEMO_ROUTE_LAPS;
        for i in 0..total {
            let age_minutes = (total - 1 - i) as i64 * DEMO_SAMPLE_INTERVAL_MINUTES;
            let sample = simulated_route_point(i, now - Duration::minutes(age_minutes));
            self.store_route_point_impl(RoutePoint {
                id: RoutePointId::new(0),
                timestamp: sample.timestamp,
                latitude: sample.latitude,
                longitude: sample.longitude,
                speed: sample.speed,
                estimated_impressions: sample.estimated_impressions,
                is_simulated: sample.is_simulated,
                created_at: now,
            });
        }
    }

    /// Add a panel to the repository.
    ///
    /// This is a helper method for setting up data. The panel will be
    /// assigned an ID automatically.
    ///
    /// # Arguments
    /// * `panel` - Panel to add (id will be overwritten)
    ///
    /// # Returns
    /// The ID assigned to the panel
    pub fn store_panel_impl(&self, mut panel: Panel) -> PanelId {
        let mut data = self.data.write();
        let panel_id = PanelId::new(data.next_panel_id);
        data.next_panel_id += 1;
        panel.id = panel_id;
        data.panels.insert(panel_id, panel);
        panel_id
    }

    /// Add a route point to the repository.
    ///
    /// This is a helper method for setting up data. The point will be
    /// assigned an ID automatically.
    pub fn store_route_point_impl(&self, mut point: RoutePoint) -> RoutePointId {
        let mut data = self.data.write();
        let point_id = RoutePointId::new(data.next_route_point_id);
        data.next_route_point_id += 1;
        point.id = point_id;
        data.route_points.push(point);
        point_id
    }

    /// Publish a transparency metrics row.
    ///
    /// This is a helper method for setting up data. The row will be
    /// assigned an ID automatically.
    pub fn store_metrics_impl(&self, mut metrics: TransparencyMetrics) -> i64 {
        let mut data = self.data.write();
        let metrics_id = data.next_metrics_id;
        data.next_metrics_id += 1;
        metrics.id = metrics_id;
        data.metrics.push(metrics);
        metrics_id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of panels stored.
    pub fn panel_count(&self) -> usize {
        self.data.read().panels.len()
    }

    /// Get the number of reservations stored.
    pub fn reservation_count(&self) -> usize {
        self.data.read().reservations.len()
    }

    /// Check if a panel exists.
    pub fn has_panel(&self, panel_id: PanelId) -> bool {
        self.data.read().panels.contains_key(&panel_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Database is not healthy"));
        }
        Ok(())
    }

    /// Helper to get a panel or return NotFound error.
    fn get_panel_impl(&self, panel_id: PanelId) -> RepositoryResult<Panel> {
        let data = self.data.read();
        data.panels
            .get(&panel_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Panel {} not found", panel_id)))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PanelRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read();
        Ok(data.is_healthy)
    }

    async fn list_panels(&self) -> RepositoryResult<Vec<Panel>> {
        let data = self.data.read();

        let mut panels: Vec<Panel> = data.panels.values().cloned().collect();
        panels.sort_by_key(|p| p.id);
        Ok(panels)
    }

    async fn get_panel(&self, panel_id: PanelId) -> RepositoryResult<Panel> {
        self.get_panel_impl(panel_id)
    }
}

// ==================== Reservation Repository ====================

#[async_trait]
impl ReservationRepository for LocalRepository {
    async fn insert_reservation(
        &self,
        reservation: &NewReservation,
    ) -> RepositoryResult<Reservation> {
        self.check_health()?;

        let now = Utc::now();
        let mut data = self.data.write();
        let reservation_id = ReservationId::new(data.next_reservation_id);
        data.next_reservation_id += 1;

        let stored = Reservation {
            id: reservation_id,
            panel_id: reservation.panel_id,
            business_name: reservation.business_name.clone(),
            contact_name: reservation.contact_name.clone(),
            email: reservation.email.clone(),
            phone: reservation.phone.clone(),
            panel_size_requested: reservation.panel_size_requested,
            artwork_url: reservation.artwork_url.clone(),
            notes: reservation.notes.clone(),
            status: ReservationStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        data.reservations.insert(reservation_id, stored.clone());
        Ok(stored)
    }

    async fn list_reservations(&self) -> RepositoryResult<Vec<Reservation>> {
        let data = self.data.read();

        let mut reservations: Vec<Reservation> = data.reservations.values().cloned().collect();
        reservations.sort_by_key(|r| std::cmp::Reverse(r.id.value()));
        Ok(reservations)
    }
}

// ==================== Route Repository ====================

#[async_trait]
impl RouteRepository for LocalRepository {
    async fn recent_route_points(&self, limit: usize) -> RepositoryResult<Vec<RoutePoint>> {
        let data = self.data.read();

        let mut points = data.route_points.clone();
        points.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then(b.id.value().cmp(&a.id.value()))
        });
        points.truncate(limit);
        Ok(points)
    }

    async fn store_route_point(&self, point: &NewRoutePoint) -> RepositoryResult<RoutePoint> {
        self.check_health()?;

        let now = Utc::now();
        let mut data = self.data.write();
        let point_id = RoutePointId::new(data.next_route_point_id);
        data.next_route_point_id += 1;

        let stored = RoutePoint {
            id: point_id,
            timestamp: point.timestamp,
            latitude: point.latitude,
            longitude: point.longitude,
            speed: point.speed,
            estimated_impressions: point.estimated_impressions,
            is_simulated: point.is_simulated,
            created_at: now,
        };

        data.route_points.push(stored.clone());
        Ok(stored)
    }
}

// ==================== Metrics Repository ====================

#[async_trait]
impl MetricsRepository for LocalRepository {
    async fn latest_metrics(&self) -> RepositoryResult<Option<TransparencyMetrics>> {
        let data = self.data.read();
        Ok(data.metrics.iter().max_by_key(|m| m.month).cloned())
    }
}
