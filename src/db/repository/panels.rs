//! Core panel repository trait.
//!
//! This trait defines the fundamental database operations for the ad panel
//! inventory: the fixed set of panels mounted on the van, their pricing and
//! their availability.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::PanelId;
use crate::models::Panel;

/// Repository trait for panel inventory operations.
///
/// This trait handles reads over the panel catalog. Panels are seeded once
/// (the van carries a fixed set) and their status changes as reservations
/// are approved, so there is no create or delete surface here.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait PanelRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Panel Operations ====================

    /// List every panel on the van.
    ///
    /// # Returns
    /// * `Ok(Vec<Panel>)` - All panels, in no guaranteed order
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_panels(&self) -> RepositoryResult<Vec<Panel>>;

    /// Retrieve a single panel by ID.
    ///
    /// # Arguments
    /// * `panel_id` - The ID of the panel to retrieve
    ///
    /// # Returns
    /// * `Ok(Panel)` - The panel with all details
    /// * `Err(RepositoryError::NotFound)` - If the panel doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_panel(&self, panel_id: PanelId) -> RepositoryResult<Panel>;
}
