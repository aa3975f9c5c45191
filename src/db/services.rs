//! High-level database service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of the repository traits. These functions contain the
//! business logic that must stay consistent regardless of the storage
//! backend: reservation validation, catalog and tracking assembly, and the
//! funding-report fallback rule.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, server-rendered site)     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Reservation validation and submission                 │
//! │  - Catalog / tracking / funding assembly                 │
//! │  - Estimate fallback when no metrics are published       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! │  - PanelRepository (inventory + health)                  │
//! │  - ReservationRepository (lead intake)                   │
//! │  - RouteRepository (GPS samples)                         │
//! │  - MetricsRepository (transparency reporting)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Postgres         │     │ Local Repository        │
//! │ (Diesel + r2d2)  │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use vanads::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::with_demo_data();
//!
//!     let catalog = services::catalog_data(&repo).await?;
//!     println!("{} panels across {} tiers", catalog.total_count, catalog.tiers.len());
//!
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use crate::api::{CatalogData, FundingReport, TrackingData};
use crate::models::{NewReservation, NewRoutePoint, Reservation, RoutePoint};
use crate::services::reservation::validate_reservation;
use crate::services::tracking::clamp_route_limit;
use crate::services::{catalog, tracking, transparency};

use super::repository::{FullRepository, RepositoryError, RepositoryResult};

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if connection is healthy
/// * `Err` if check fails
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Catalog Operations ====================

/// Assemble the public panel catalog.
///
/// Fetches every panel and derives the three pricing tiers with their
/// availability counts. An empty inventory is not an error: the tiers
/// render with zero availability.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(CatalogData)` - Panels cheapest-first plus the derived tiers
/// * `Err` if the fetch fails
pub async fn catalog_data<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<CatalogData> {
    let panels = repo.list_panels().await?;
    info!("Service layer: assembled catalog from {} panels", panels.len());
    Ok(catalog::build_catalog_data(&panels))
}

// ==================== Reservation Operations ====================

/// Validate and store a reservation request.
///
/// This function orchestrates the complete submission:
/// 1. Validate the request fields (names, email, artwork data URL, notes)
/// 2. If a specific panel is referenced, confirm it exists
/// 3. Insert exactly one row with status `pending`
///
/// A validation failure or failed insert leaves nothing stored, so the
/// caller can resubmit the identical request once the problem clears.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `request` - The reservation request to store
///
/// # Returns
/// * `Ok(Reservation)` - The stored reservation with its assigned id
/// * `Err(RepositoryError::ValidationError)` - Rejected request
/// * `Err` if the insert fails
pub async fn submit_reservation<R: FullRepository + ?Sized>(
    repo: &R,
    request: &NewReservation,
) -> RepositoryResult<Reservation> {
    validate_reservation(request).map_err(RepositoryError::validation)?;

    if let Some(panel_id) = request.panel_id {
        let panel = repo.get_panel(panel_id).await.map_err(|e| match e {
            RepositoryError::NotFound { .. } => {
                RepositoryError::validation(format!("Panel {} does not exist", panel_id))
            }
            other => other,
        })?;

        if !panel.is_available() {
            // Accepted anyway: reservations are leads, and the follow-up
            // consultation resolves contested positions.
            warn!(
                "Service layer: reservation for panel {} ({}) which is not available",
                panel_id, panel.position
            );
        }
    }

    let stored = repo.insert_reservation(request).await?;
    info!(
        "Service layer: stored reservation {} for '{}' ({} tier)",
        stored.id, stored.business_name, stored.panel_size_requested
    );

    Ok(stored)
}

// ==================== Route Operations ====================

/// Assemble the GPS tracking dataset.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `limit` - Requested sample count; `None` and out-of-range values are
///   clamped to the allowed window
///
/// # Returns
/// * `Ok(TrackingData)` - Samples newest-first with impression totals
/// * `Err` if the fetch fails
pub async fn tracking_data<R: FullRepository + ?Sized>(
    repo: &R,
    limit: Option<usize>,
) -> RepositoryResult<TrackingData> {
    let limit = clamp_route_limit(limit);
    let points = repo.recent_route_points(limit).await?;
    Ok(tracking::build_tracking_data(&points))
}

/// Fetch route points stored after a given id, oldest first.
///
/// Used by the live stream: each poll passes the last id it delivered and
/// receives only the samples that arrived since, in chronological order.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `after` - Last route point id already delivered, if any
/// * `cap` - Upper bound on samples fetched per poll
///
/// # Returns
/// * `Ok(Vec<RoutePoint>)` - New samples oldest-first (possibly empty)
/// * `Err` if the fetch fails
pub async fn route_points_since<R: FullRepository + ?Sized>(
    repo: &R,
    after: Option<i64>,
    cap: usize,
) -> RepositoryResult<Vec<RoutePoint>> {
    let mut points = repo.recent_route_points(cap).await?;
    if let Some(after) = after {
        points.retain(|p| p.id.value() > after);
    }
    points.reverse();
    Ok(points)
}

/// Store a single route sample.
///
/// Only the demo route ticker writes through this today; live tracker
/// ingestion is out of scope.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `point` - The sample to store
///
/// # Returns
/// * `Ok(RoutePoint)` - The stored sample with its assigned id
/// * `Err` if the insert fails
pub async fn record_route_point<R: FullRepository + ?Sized>(
    repo: &R,
    point: &NewRoutePoint,
) -> RepositoryResult<RoutePoint> {
    repo.store_route_point(point).await
}

// ==================== Transparency Operations ====================

/// Assemble the funding report for the transparency page.
///
/// Uses the newest published metrics row when one exists; otherwise falls
/// back to the launch estimates (marked `estimated: true`).
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(FundingReport)` - Funding math for the current month
/// * `Err` if the fetch fails
pub async fn funding_report<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<FundingReport> {
    let metrics = repo.latest_metrics().await?;
    if metrics.is_none() {
        info!("Service layer: no published metrics, falling back to estimates");
    }
    Ok(transparency::build_funding_report(metrics))
}
