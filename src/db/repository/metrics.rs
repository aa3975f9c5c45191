//! Transparency metrics repository trait.
//!
//! One row per month of published finances. The site renders the newest row,
//! or launch estimates when nothing has been published yet.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::TransparencyMetrics;

/// Repository trait for published financial metrics.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Fetch the most recently published metrics row.
    ///
    /// # Returns
    /// * `Ok(Some(TransparencyMetrics))` - The newest row by month
    /// * `Ok(None)` - If no metrics have been published yet
    /// * `Err(RepositoryError)` - If the operation fails
    async fn latest_metrics(&self) -> RepositoryResult<Option<TransparencyMetrics>>;
}
