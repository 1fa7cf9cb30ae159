//! TripRepository trait definition.
//!
//! CRUD operations over the trips table. Implementations live in
//! wayfarer-infra (e.g., `SqliteTripRepository`). Uses native async fn in
//! traits (RPITIT, Rust 2024 edition).

use wayfarer_types::error::RepositoryError;
use wayfarer_types::trip::Trip;

/// Repository trait for trip persistence.
pub trait TripRepository: Send + Sync {
    /// Insert a new trip row.
    fn insert(
        &self,
        trip: &Trip,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Full-row update keyed by trip_uuid.
    ///
    /// An update that matches no row is not an error.
    fn update(
        &self,
        trip: &Trip,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Hard-delete the row with the given id; deleting a missing row is
    /// not an error.
    fn delete(
        &self,
        trip_uuid: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Fetch a trip by id.
    fn get(
        &self,
        trip_uuid: &str,
    ) -> impl std::future::Future<Output = Result<Option<Trip>, RepositoryError>> + Send;

    /// All trips owned by a user, in store-insertion order.
    fn list_by_user(
        &self,
        user_uuid: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Trip>, RepositoryError>> + Send;
}
