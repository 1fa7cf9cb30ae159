//! SQLite trip repository implementation.
//!
//! Implements `TripRepository` from `wayfarer-core` using sqlx with split
//! read/write pools: raw parameterized queries, a private Row struct for
//! SQLite-to-domain mapping, writes on the writer pool, reads on the reader
//! pool.

use sqlx::Row;

use wayfarer_core::trip::repository::TripRepository;
use wayfarer_types::error::RepositoryError;
use wayfarer_types::trip::Trip;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TripRepository`.
pub struct SqliteTripRepository {
    pool: DatabasePool,
}

impl SqliteTripRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Trip.
struct TripRow {
    trip_uuid: String,
    user_uuid: String,
    name: String,
    start_date: Option<String>,
    end_date: Option<String>,
    destination: String,
    preferences: Option<String>,
    notes: Option<String>,
}

impl TripRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            trip_uuid: row.try_get("trip_uuid")?,
            user_uuid: row.try_get("user_uuid")?,
            name: row.try_get("name")?,
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            destination: row.try_get("destination")?,
            preferences: row.try_get("preferences")?,
            notes: row.try_get("notes")?,
        })
    }

    fn into_trip(self) -> Trip {
        Trip {
            trip_uuid: self.trip_uuid,
            user_uuid: self.user_uuid,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            destination: self.destination,
            preferences: self.preferences,
            notes: self.notes,
        }
    }
}

impl TripRepository for SqliteTripRepository {
    async fn insert(&self, trip: &Trip) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO trips (trip_uuid, user_uuid, name, start_date, end_date, destination, preferences, notes)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&trip.trip_uuid)
        .bind(&trip.user_uuid)
        .bind(&trip.name)
        .bind(&trip.start_date)
        .bind(&trip.end_date)
        .bind(&trip.destination)
        .bind(&trip.preferences)
        .bind(&trip.notes)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, trip: &Trip) -> Result<(), RepositoryError> {
        // Full-row replace. Zero affected rows is a silent success: editing
        // an id that does not exist is not an error at this layer.
        sqlx::query(
            r#"UPDATE trips
               SET user_uuid = ?, name = ?, start_date = ?, end_date = ?,
                   destination = ?, preferences = ?, notes = ?
               WHERE trip_uuid = ?"#,
        )
        .bind(&trip.user_uuid)
        .bind(&trip.name)
        .bind(&trip.start_date)
        .bind(&trip.end_date)
        .bind(&trip.destination)
        .bind(&trip.preferences)
        .bind(&trip.notes)
        .bind(&trip.trip_uuid)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, trip_uuid: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM trips WHERE trip_uuid = ?")
            .bind(trip_uuid)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, trip_uuid: &str) -> Result<Option<Trip>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM trips WHERE trip_uuid = ?")
            .bind(trip_uuid)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let trip_row = TripRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(trip_row.into_trip()))
            }
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_uuid: &str) -> Result<Vec<Trip>, RepositoryError> {
        // rowid order is insertion order for this table.
        let rows = sqlx::query("SELECT * FROM trips WHERE user_uuid = ? ORDER BY rowid")
            .bind(user_uuid)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut trips = Vec::with_capacity(rows.len());
        for row in &rows {
            let trip_row =
                TripRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            trips.push(trip_row.into_trip());
        }

        Ok(trips)
    }
}
