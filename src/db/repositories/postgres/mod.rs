//! Postgres repository implementation using Diesel.
//!
//! This module implements the repository traits against a Postgres database.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic retry for transient failures
//! - Connection health monitoring
//! - Automatic migration execution
//! - Panel inventory seeding on first run
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
//! - `PG_MAX_RETRIES`: Maximum retry attempts for transient failures (default: 3)
//! - `PG_RETRY_DELAY_MS`: Initial retry delay in milliseconds (default: 100)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::task;

use crate::api::{PanelId, ReservationId, RoutePointId};
use crate::db::repository::{
    ErrorContext, MetricsRepository, PanelRepository, RepositoryError, RepositoryResult,
    ReservationRepository, RouteRepository,
};
use crate::models::{
    NewReservation, NewRoutePoint, OperatingCosts, Panel, PanelDimensions, PanelSize, PanelStatus,
    Reservation, ReservationStatus, RoutePoint, TransparencyMetrics,
};
use crate::services::catalog::{position_slug, TIER_TEMPLATES};

mod models;
mod schema;

use models::*;
use schema::*;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
    /// Maximum number of retry attempts for transient failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds (doubles with each retry)
    pub retry_delay_ms: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
    /// - `PG_POOL_MAX`: Maximum pool size (default: 10)
    /// - `PG_POOL_MIN`: Minimum pool size (default: 1)
    /// - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    /// - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
    /// - `PG_MAX_RETRIES`: Maximum retry attempts (default: 3)
    /// - `PG_RETRY_DELAY_MS`: Initial retry delay in milliseconds (default: 100)
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        let max_retries = std::env::var("PG_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3);

        let retry_delay_ms = std::env::var("PG_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(100);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Pool health statistics.
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Number of connections currently in use
    pub connections_in_use: u32,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Total number of connections in the pool
    pub total_connections: u32,
    /// Maximum pool size
    pub max_size: u32,
    /// Total successful queries executed
    pub total_queries: u64,
    /// Total failed queries
    pub failed_queries: u64,
    /// Total retried operations
    pub retried_operations: u64,
}

/// Diesel-backed repository for Postgres.
///
/// This repository implementation provides:
/// - Connection pooling with configurable limits
/// - Automatic retry for transient failures
/// - Health monitoring and statistics
/// - Automatic schema migrations and panel seeding
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
    config: PostgresConfig,
    // Metrics counters
    total_queries: std::sync::Arc<AtomicU64>,
    failed_queries: std::sync::Arc<AtomicU64>,
    retried_operations: std::sync::Arc<AtomicU64>,
}

impl PostgresRepository {
    /// Create a new repository, run pending migrations, and seed the panel
    /// inventory if the table is empty.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if connection or migration fails
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true) // Validate connections before use
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        // Run migrations once during initialization
        {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection_for_migrations"),
                )
            })?;
            Self::run_migrations(&mut conn)?;
            Self::seed_panels_if_empty(&mut conn)?;
        }

        Ok(Self {
            pool,
            config,
            total_queries: std::sync::Arc::new(AtomicU64::new(0)),
            failed_queries: std::sync::Arc::new(AtomicU64::new(0)),
            retried_operations: std::sync::Arc::new(AtomicU64::new(0)),
        })
    }

    /// Run pending database migrations.
    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;

        Ok(())
    }

    /// Insert the fixed 15-panel inventory on first run.
    ///
    /// The van carries a fixed set of panels, so the inventory is seeded
    /// from the tier templates when the table is empty and left alone
    /// afterwards.
    fn seed_panels_if_empty(conn: &mut PgConnection) -> RepositoryResult<()> {
        use diesel::dsl::count_star;

        let existing: i64 = panels::table
            .select(count_star())
            .first(conn)
            .map_err(map_diesel_error)?;
        if existing > 0 {
            return Ok(());
        }

        let rows: Vec<NewPanelRow> = TIER_TEMPLATES
            .iter()
            .flat_map(|template| {
                template.positions.iter().map(move |label| NewPanelRow {
                    panel_name: (*label).to_string(),
                    size: template.size.as_str().to_string(),
                    position: position_slug(template.size, label),
                    width_in: template.dimensions.width,
                    height_in: template.dimensions.height,
                    monthly_cost: template.monthly_cost,
                    status: PanelStatus::Available.as_str().to_string(),
                    reserved_by: None,
                })
            })
            .collect();

        diesel::insert_into(panels::table)
            .values(&rows)
            .execute(conn)
            .map_err(map_diesel_error)?;

        Ok(())
    }

    /// Execute a database operation with automatic retry for transient failures.
    ///
    /// This method will retry the operation up to `max_retries` times if a
    /// retryable error occurs (connection errors, timeouts, serialization failures).
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static + Clone,
    {
        let pool = self.pool.clone();
        let max_retries = self.config.max_retries;
        let retry_delay_ms = self.config.retry_delay_ms;
        let total_queries = self.total_queries.clone();
        let failed_queries = self.failed_queries.clone();
        let retried_operations = self.retried_operations.clone();

        task::spawn_blocking(move || {
            let mut last_error = None;
            let mut retry_delay = Duration::from_millis(retry_delay_ms);

            for attempt in 0..=max_retries {
                if attempt > 0 {
                    retried_operations.fetch_add(1, Ordering::Relaxed);
                    std::thread::sleep(retry_delay);
                    retry_delay *= 2; // Exponential backoff
                }

                // Get connection
                let mut conn = match pool.get() {
                    Ok(c) => c,
                    Err(e) => {
                        let err = RepositoryError::connection_with_context(
                            e.to_string(),
                            ErrorContext::new("get_connection")
                                .with_details(format!("attempt={}", attempt + 1))
                                .retryable(),
                        );
                        if attempt < max_retries {
                            last_error = Some(err);
                            continue;
                        }
                        failed_queries.fetch_add(1, Ordering::Relaxed);
                        return Err(err);
                    }
                };

                // Execute the operation
                total_queries.fetch_add(1, Ordering::Relaxed);
                match f.clone()(&mut conn) {
                    Ok(result) => return Ok(result),
                    Err(e) if e.is_retryable() && attempt < max_retries => {
                        last_error = Some(e);
                        continue;
                    }
                    Err(e) => {
                        failed_queries.fetch_add(1, Ordering::Relaxed);
                        return Err(e);
                    }
                }
            }

            failed_queries.fetch_add(1, Ordering::Relaxed);
            Err(last_error.unwrap_or_else(|| {
                RepositoryError::internal("Max retries exceeded with no error captured")
            }))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }

    /// Get pool health statistics.
    ///
    /// Returns current pool state and query statistics for monitoring.
    pub fn get_pool_stats(&self) -> PoolStats {
        let state = self.pool.state();
        PoolStats {
            connections_in_use: state.connections - state.idle_connections,
            idle_connections: state.idle_connections,
            total_connections: state.connections,
            max_size: self.config.max_pool_size,
            total_queries: self.total_queries.load(Ordering::Relaxed),
            failed_queries: self.failed_queries.load(Ordering::Relaxed),
            retried_operations: self.retried_operations.load(Ordering::Relaxed),
        }
    }

    /// Check if the database connection is healthy.
    ///
    /// Performs a simple query to verify connectivity.
    pub async fn is_healthy(&self) -> bool {
        self.health_check().await.unwrap_or(false)
    }

    /// Get detailed health information.
    ///
    /// Returns a tuple of (is_healthy, latency_ms, error_message).
    pub async fn health_check_detailed(&self) -> (bool, Option<u64>, Option<String>) {
        let start = Instant::now();
        match self.health_check().await {
            Ok(true) => (true, Some(start.elapsed().as_millis() as u64), None),
            Ok(false) => (
                false,
                Some(start.elapsed().as_millis() as u64),
                Some("Health check returned false".to_string()),
            ),
            Err(e) => (
                false,
                Some(start.elapsed().as_millis() as u64),
                Some(e.to_string()),
            ),
        }
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::from(err)
}

fn json_to_costs(value: &Value) -> RepositoryResult<OperatingCosts> {
    serde_json::from_value(value.clone()).map_err(|e| {
        RepositoryError::internal(format!("Failed to parse operating costs JSON: {}", e))
    })
}

fn row_to_panel(row: PanelRow) -> RepositoryResult<Panel> {
    let size: PanelSize = row.size.parse().map_err(RepositoryError::internal)?;
    let status: PanelStatus = row.status.parse().map_err(RepositoryError::internal)?;

    Ok(Panel {
        id: PanelId::new(row.panel_id),
        name: row.panel_name,
        size,
        position: row.position,
        dimensions: PanelDimensions::new(row.width_in, row.height_in),
        monthly_cost: row.monthly_cost,
        status,
        reserved_by: row.reserved_by,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn row_to_reservation(row: ReservationRow) -> RepositoryResult<Reservation> {
    let panel_size_requested: PanelSize = row
        .panel_size_requested
        .parse()
        .map_err(RepositoryError::internal)?;
    let status: ReservationStatus = row.status.parse().map_err(RepositoryError::internal)?;

    Ok(Reservation {
        id: ReservationId::new(row.reservation_id),
        panel_id: row.panel_id.map(PanelId::new),
        business_name: row.business_name,
        contact_name: row.contact_name,
        email: row.email,
        phone: row.phone,
        panel_size_requested,
        artwork_url: row.artwork_url,
        notes: row.notes,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn row_to_route_point(row: RoutePointRow) -> RoutePoint {
    RoutePoint {
        id: RoutePointId::new(row.route_point_id),
        timestamp: row.recorded_at,
        latitude: row.latitude,
        longitude: row.longitude,
        speed: row.speed,
        estimated_impressions: row.estimated_impressions,
        is_simulated: row.is_simulated,
        created_at: row.created_at,
    }
}

fn row_to_metrics(row: TransparencyMetricsRow) -> RepositoryResult<TransparencyMetrics> {
    Ok(TransparencyMetrics {
        id: row.metrics_id,
        month: row.month,
        vehicle_cost: row.vehicle_cost,
        monthly_payment: row.monthly_payment,
        panels_funded_count: row.panels_funded_count,
        total_revenue: row.total_revenue,
        operating_costs: json_to_costs(&row.operating_costs)?,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl PanelRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn list_panels(&self) -> RepositoryResult<Vec<Panel>> {
        self.with_conn(|conn| {
            let rows = panels::table
                .select(PanelRow::as_select())
                .order(panels::panel_id.asc())
                .load::<PanelRow>(conn)
                .map_err(map_diesel_error)?;

            let mut result = Vec::with_capacity(rows.len());
            for row in rows {
                result.push(row_to_panel(row)?);
            }
            Ok(result)
        })
        .await
    }

    async fn get_panel(&self, panel_id: PanelId) -> RepositoryResult<Panel> {
        self.with_conn(move |conn| {
            let row = panels::table
                .filter(panels::panel_id.eq(panel_id.value()))
                .select(PanelRow::as_select())
                .first::<PanelRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;

            match row {
                Some(row) => row_to_panel(row),
                None => Err(RepositoryError::not_found(format!(
                    "Panel {} not found",
                    panel_id
                ))),
            }
        })
        .await
    }
}

// ==================== Reservation Repository ====================

#[async_trait]
impl ReservationRepository for PostgresRepository {
    async fn insert_reservation(
        &self,
        reservation: &NewReservation,
    ) -> RepositoryResult<Reservation> {
        let reservation = reservation.clone();
        self.with_conn(move |conn| {
            let new_row = NewReservationRow {
                panel_id: reservation.panel_id.map(|id| id.value()),
                business_name: reservation.business_name.clone(),
                contact_name: reservation.contact_name.clone(),
                email: reservation.email.clone(),
                phone: reservation.phone.clone(),
                panel_size_requested: reservation.panel_size_requested.as_str().to_string(),
                artwork_url: reservation.artwork_url.clone(),
                notes: reservation.notes.clone(),
                status: ReservationStatus::Pending.as_str().to_string(),
            };

            let inserted: ReservationRow = diesel::insert_into(reservations::table)
                .values(&new_row)
                .returning(ReservationRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;

            row_to_reservation(inserted)
        })
        .await
    }

    async fn list_reservations(&self) -> RepositoryResult<Vec<Reservation>> {
        self.with_conn(|conn| {
            let rows = reservations::table
                .select(ReservationRow::as_select())
                .order((
                    reservations::created_at.desc(),
                    reservations::reservation_id.desc(),
                ))
                .load::<ReservationRow>(conn)
                .map_err(map_diesel_error)?;

            let mut result = Vec::with_capacity(rows.len());
            for row in rows {
                result.push(row_to_reservation(row)?);
            }
            Ok(result)
        })
        .await
    }
}

// ==================== Route Repository ====================

#[async_trait]
impl RouteRepository for PostgresRepository {
    async fn recent_route_points(&self, limit: usize) -> RepositoryResult<Vec<RoutePoint>> {
        self.with_conn(move |conn| {
            let rows = route_points::table
                .select(RoutePointRow::as_select())
                .order((
                    route_points::recorded_at.desc(),
                    route_points::route_point_id.desc(),
                ))
                .limit(limit as i64)
                .load::<RoutePointRow>(conn)
                .map_err(map_diesel_error)?;

            Ok(rows.into_iter().map(row_to_route_point).collect())
        })
        .await
    }

    async fn store_route_point(&self, point: &NewRoutePoint) -> RepositoryResult<RoutePoint> {
        let point = point.clone();
        self.with_conn(move |conn| {
            let new_row = NewRoutePointRow {
                recorded_at: point.timestamp,
                latitude: point.latitude,
                longitude: point.longitude,
                speed: point.speed,
                estimated_impressions: point.estimated_impressions,
                is_simulated: point.is_simulated,
            };

            let inserted: RoutePointRow = diesel::insert_into(route_points::table)
                .values(&new_row)
                .returning(RoutePointRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;

            Ok(row_to_route_point(inserted))
        })
        .await
    }
}

// ==================== Metrics Repository ====================

#[async_trait]
impl MetricsRepository for PostgresRepository {
    async fn latest_metrics(&self) -> RepositoryResult<Option<TransparencyMetrics>> {
        self.with_conn(|conn| {
            let row = transparency_metrics::table
                .select(TransparencyMetricsRow::as_select())
                .order(transparency_metrics::month.desc())
                .first::<TransparencyMetricsRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;

            row.map(row_to_metrics).transpose()
        })
        .await
    }
}
