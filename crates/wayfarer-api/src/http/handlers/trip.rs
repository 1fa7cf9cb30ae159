//! Trip CRUD handlers.
//!
//! Bodies arrive as loose JSON objects and stay loose until the validator
//! in wayfarer-core has classified each field, so wrong-type input gets a
//! wrong-type error rather than a generic deserialization failure.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use wayfarer_types::trip::{Trip, TripFields};

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for `POST /trips`.
#[derive(Debug, Serialize)]
pub struct TripCreated {
    pub trip_uuid: String,
}

/// POST /trips - Validate and store a new trip.
pub async fn add_trip(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<TripCreated>), AppError> {
    let fields = as_fields(body)?;
    let trip_uuid = state.trip_service.add_trip(&fields).await?;
    Ok((StatusCode::CREATED, Json(TripCreated { trip_uuid })))
}

/// GET /trips/{trip_uuid} - Fetch a trip.
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_uuid): Path<String>,
) -> Result<Json<Trip>, AppError> {
    let trip = state.trip_service.get_trip(&trip_uuid).await?;
    Ok(Json(trip))
}

/// PUT /trips/{trip_uuid} - Full-record replace.
pub async fn edit_trip(
    State(state): State<AppState>,
    Path(trip_uuid): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<StatusCode, AppError> {
    let fields = as_fields(body)?;
    state.trip_service.edit_trip(&trip_uuid, &fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /trips/{trip_uuid} - Hard-delete a trip.
pub async fn cancel_trip(
    State(state): State<AppState>,
    Path(trip_uuid): Path<String>,
) -> Result<StatusCode, AppError> {
    state.trip_service.cancel_trip(&trip_uuid).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/{user_uuid}/trips - All trips owned by a user.
pub async fn list_trips_by_user(
    State(state): State<AppState>,
    Path(user_uuid): Path<String>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let trips = state.trip_service.list_trips_by_user(&user_uuid).await?;
    Ok(Json(trips))
}

fn as_fields(body: serde_json::Value) -> Result<TripFields, AppError> {
    match body {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(
            "request body must be a JSON object".to_string(),
        )),
    }
}
