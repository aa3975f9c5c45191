//! Repository trait definitions for database operations.
//!
//! This module provides a collection of focused repository traits that abstract
//! database operations. By splitting responsibilities across multiple traits,
//! implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`panels`]: Panel inventory reads and the health check
//! - [`reservations`]: Reservation form storage
//! - [`routes`]: GPS route point storage and recent-point queries
//! - [`metrics`]: Published transparency metrics
//!
//! # Trait Composition
//!
//! A complete repository implementation typically implements all traits:
//!
//! ```ignore
//! impl PanelRepository for MyRepo { ... }
//! impl ReservationRepository for MyRepo { ... }
//! impl RouteRepository for MyRepo { ... }
//! impl MetricsRepository for MyRepo { ... }
//! ```
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> Result<()> {
//!     // Can use any repository method
//!     let panels = repo.list_panels().await?;
//!     repo.insert_reservation(&reservation).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod panels;
pub mod reservations;
pub mod routes;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use metrics::MetricsRepository;
pub use panels::PanelRepository;
pub use reservations::ReservationRepository;
pub use routes::RouteRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// all four repository traits. Use this as a convenient bound when you
/// need access to all repository operations.
///
/// # Example
///
/// ```ignore
/// async fn submit<R: FullRepository>(
///     repo: &R,
///     reservation: &NewReservation,
/// ) -> RepositoryResult<Reservation> {
///     // Can use all repository methods
///     repo.insert_reservation(reservation).await
/// }
/// ```
pub trait FullRepository:
    PanelRepository + ReservationRepository + RouteRepository + MetricsRepository
{
}

// Blanket implementation: any type implementing all four traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: PanelRepository + ReservationRepository + RouteRepository + MetricsRepository
{
}
