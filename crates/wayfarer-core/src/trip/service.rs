//! Trip service: id generation, validation, and delegation to the repository.

use tracing::info;
use uuid::Uuid;

use wayfarer_types::error::{RepositoryError, TripError};
use wayfarer_types::trip::{Trip, TripFields};

use crate::trip::repository::TripRepository;
use crate::trip::validate::validate_trip;

/// Orchestrates trip CRUD on top of a [`TripRepository`].
///
/// Generic over the repository so wayfarer-core never depends on
/// wayfarer-infra.
pub struct TripService<R: TripRepository> {
    repo: R,
}

impl<R: TripRepository> TripService<R> {
    /// Create a new trip service over the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a trip from caller-supplied fields.
    ///
    /// Generates the trip_uuid, runs full-record validation, and inserts.
    /// Validation failure precedes any store mutation.
    pub async fn add_trip(&self, fields: &TripFields) -> Result<String, TripError> {
        let trip_uuid = Uuid::now_v7().to_string();
        let trip = validate_trip(trip_uuid.clone(), fields)?;

        self.repo.insert(&trip).await.map_err(storage)?;
        info!(trip_uuid = %trip.trip_uuid, user_uuid = %trip.user_uuid, "Trip created");

        Ok(trip_uuid)
    }

    /// Full-record replace of an existing trip.
    ///
    /// The whole record is re-validated with the given id. Editing an id
    /// that does not exist succeeds silently at the store layer.
    pub async fn edit_trip(&self, trip_uuid: &str, fields: &TripFields) -> Result<(), TripError> {
        let trip = validate_trip(trip_uuid.to_string(), fields)?;

        self.repo.update(&trip).await.map_err(storage)?;
        info!(trip_uuid = %trip_uuid, "Trip updated");

        Ok(())
    }

    /// Hard-delete a trip. No error if the id does not exist.
    pub async fn cancel_trip(&self, trip_uuid: &str) -> Result<(), TripError> {
        self.repo.delete(trip_uuid).await.map_err(storage)?;
        info!(trip_uuid = %trip_uuid, "Trip cancelled");
        Ok(())
    }

    /// Fetch a trip by id.
    pub async fn get_trip(&self, trip_uuid: &str) -> Result<Trip, TripError> {
        self.repo
            .get(trip_uuid)
            .await
            .map_err(storage)?
            .ok_or(TripError::NotFound)
    }

    /// All trips owned by a user, in insertion order; empty if none.
    pub async fn list_trips_by_user(&self, user_uuid: &str) -> Result<Vec<Trip>, TripError> {
        self.repo.list_by_user(user_uuid).await.map_err(storage)
    }
}

fn storage(e: RepositoryError) -> TripError {
    TripError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory TripRepository that mimics the store-layer contracts:
    /// insertion order is preserved, update/delete of a missing id succeed.
    #[derive(Default)]
    struct MemTripRepository {
        rows: Mutex<Vec<Trip>>,
    }

    impl TripRepository for MemTripRepository {
        async fn insert(&self, trip: &Trip) -> Result<(), RepositoryError> {
            self.rows.lock().unwrap().push(trip.clone());
            Ok(())
        }

        async fn update(&self, trip: &Trip) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|r| r.trip_uuid == trip.trip_uuid) {
                *row = trip.clone();
            }
            Ok(())
        }

        async fn delete(&self, trip_uuid: &str) -> Result<(), RepositoryError> {
            self.rows.lock().unwrap().retain(|r| r.trip_uuid != trip_uuid);
            Ok(())
        }

        async fn get(&self, trip_uuid: &str) -> Result<Option<Trip>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.trip_uuid == trip_uuid)
                .cloned())
        }

        async fn list_by_user(&self, user_uuid: &str) -> Result<Vec<Trip>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_uuid == user_uuid)
                .cloned()
                .collect())
        }
    }

    fn fields(value: serde_json::Value) -> TripFields {
        value.as_object().unwrap().clone()
    }

    fn paris(user: &str) -> TripFields {
        fields(json!({
            "user_uuid": user,
            "name": "Paris getaway",
            "destination": "Paris",
            "start_date": "2026-04-01",
            "end_date": "2026-04-08",
        }))
    }

    #[tokio::test]
    async fn test_add_then_get_returns_identical_fields() {
        let service = TripService::new(MemTripRepository::default());

        let id = service.add_trip(&paris("u1")).await.unwrap();
        let trip = service.get_trip(&id).await.unwrap();

        assert_eq!(trip.trip_uuid, id);
        assert_eq!(trip.user_uuid, "u1");
        assert_eq!(trip.name, "Paris getaway");
        assert_eq!(trip.destination, "Paris");
        assert_eq!(trip.start_date.as_deref(), Some("2026-04-01"));
        assert_eq!(trip.end_date.as_deref(), Some("2026-04-08"));
    }

    #[tokio::test]
    async fn test_add_validation_failure_inserts_nothing() {
        let service = TripService::new(MemTripRepository::default());

        let bad = fields(json!({
            "user_uuid": "u1",
            "name": "",
            "destination": "Paris",
        }));
        let err = service.add_trip(&bad).await.unwrap_err();
        assert!(matches!(err, TripError::Validation(_)));

        let trips = service.list_trips_by_user("u1").await.unwrap();
        assert!(trips.is_empty());
    }

    #[tokio::test]
    async fn test_edit_replaces_fields_and_keeps_id() {
        let service = TripService::new(MemTripRepository::default());
        let id = service.add_trip(&paris("u1")).await.unwrap();

        let mut updated = paris("u1");
        updated.insert("name".to_string(), json!("Spring in Paris"));
        service.edit_trip(&id, &updated).await.unwrap();

        let trip = service.get_trip(&id).await.unwrap();
        assert_eq!(trip.trip_uuid, id);
        assert_eq!(trip.name, "Spring in Paris");
    }

    #[tokio::test]
    async fn test_edit_of_missing_id_succeeds_silently() {
        let service = TripService::new(MemTripRepository::default());
        service.edit_trip("no-such-trip", &paris("u1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_edit_revalidates_full_record() {
        let service = TripService::new(MemTripRepository::default());
        let id = service.add_trip(&paris("u1")).await.unwrap();

        let mut updated = paris("u1");
        updated.insert("start_date".to_string(), json!("2026-04-20"));
        // end_date stays 2026-04-08, now before the start.
        let err = service.edit_trip(&id, &updated).await.unwrap_err();
        assert!(matches!(
            err,
            TripError::Validation(wayfarer_types::error::TripValidationError::DateOrder { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_then_get_is_not_found() {
        let service = TripService::new(MemTripRepository::default());
        let id = service.add_trip(&paris("u1")).await.unwrap();

        service.cancel_trip(&id).await.unwrap();
        let err = service.get_trip(&id).await.unwrap_err();
        assert!(matches!(err, TripError::NotFound));

        // Cancelling again is still fine.
        service.cancel_trip(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_filters_by_user_in_insertion_order() {
        let service = TripService::new(MemTripRepository::default());

        let first = service.add_trip(&paris("u1")).await.unwrap();
        service.add_trip(&paris("u2")).await.unwrap();
        let third = service.add_trip(&paris("u1")).await.unwrap();

        let trips = service.list_trips_by_user("u1").await.unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].trip_uuid, first);
        assert_eq!(trips[1].trip_uuid, third);

        assert!(service.list_trips_by_user("u3").await.unwrap().is_empty());
    }
}
