//! Route point repository trait.
//!
//! GPS samples recorded while the van is on the road. The public site only
//! reads these; writes come from the tracking ingest and from demo seeding.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewRoutePoint, RoutePoint};

/// Repository trait for GPS route point storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Fetch the most recent route points, newest first.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of points to return
    ///
    /// # Returns
    /// * `Ok(Vec<RoutePoint>)` - Points ordered by timestamp descending
    /// * `Err(RepositoryError)` - If the operation fails
    async fn recent_route_points(&self, limit: usize) -> RepositoryResult<Vec<RoutePoint>>;

    /// Store a single GPS sample.
    ///
    /// # Arguments
    /// * `point` - The sample to store
    ///
    /// # Returns
    /// * `Ok(RoutePoint)` - The stored point including assigned ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_route_point(&self, point: &NewRoutePoint) -> RepositoryResult<RoutePoint>;
}
