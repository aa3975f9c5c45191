//! Reservation repository trait.
//!
//! Reservations are the write path of the public site: a business fills in
//! the form and a `pending` row is stored for follow-up.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewReservation, Reservation};

/// Repository trait for reservation storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Store a new reservation request.
    ///
    /// Implementations assign the ID and timestamps and set the status to
    /// `pending`. Nothing is persisted when the insert fails, so callers may
    /// safely resubmit the same payload.
    ///
    /// # Arguments
    /// * `reservation` - The submitted form data
    ///
    /// # Returns
    /// * `Ok(Reservation)` - The stored reservation including assigned ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_reservation(
        &self,
        reservation: &NewReservation,
    ) -> RepositoryResult<Reservation>;

    /// List all reservations, newest first.
    ///
    /// # Returns
    /// * `Ok(Vec<Reservation>)` - All stored reservations
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_reservations(&self) -> RepositoryResult<Vec<Reservation>>;
}
