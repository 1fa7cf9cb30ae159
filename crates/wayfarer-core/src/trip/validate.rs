//! Trip record validation.
//!
//! Assembles a [`Trip`] from caller-supplied loose JSON fields. Checks run
//! in a fixed order: shape over all fields first, then required/emptiness,
//! then date format, then date ordering. The first failure wins; nothing
//! is collected.

use chrono::NaiveDate;
use serde_json::Value;

use wayfarer_types::error::TripValidationError;
use wayfarer_types::trip::{Trip, TripFields};

/// Text fields that must be present and non-empty after trimming.
const REQUIRED_TEXT_FIELDS: [&str; 3] = ["user_uuid", "name", "destination"];

/// Optional free-text fields, stored as given.
const OPTIONAL_TEXT_FIELDS: [&str; 2] = ["preferences", "notes"];

/// Optional date fields; when present they must parse as `YYYY-MM-DD`.
const DATE_FIELDS: [&str; 2] = ["start_date", "end_date"];

/// Validate caller-supplied fields into a [`Trip`] with the given id.
///
/// `trip_uuid` is generated by the service on add and fixed by the caller
/// on edit; both paths run full-record validation here. Fields unknown to
/// the trip schema are ignored.
pub fn validate_trip(
    trip_uuid: String,
    fields: &TripFields,
) -> Result<Trip, TripValidationError> {
    // Shape pass: any present field that is not text fails before the
    // emptiness and format checks run. Null counts as absent.
    for &field in REQUIRED_TEXT_FIELDS
        .iter()
        .chain(OPTIONAL_TEXT_FIELDS.iter())
        .chain(DATE_FIELDS.iter())
    {
        if let Some(value) = fields.get(field) {
            if !value.is_null() && !value.is_string() {
                return Err(TripValidationError::WrongType {
                    field,
                    actual: json_type_name(value),
                });
            }
        }
    }

    if trip_uuid.trim().is_empty() {
        return Err(TripValidationError::RequiredField { field: "trip_uuid" });
    }
    let user_uuid = required_text(fields, "user_uuid")?;
    let name = required_text(fields, "name")?;
    let destination = required_text(fields, "destination")?;

    let start_date = optional_date(fields, "start_date")?;
    let end_date = optional_date(fields, "end_date")?;

    if let (Some((start_raw, start)), Some((end_raw, end))) = (&start_date, &end_date) {
        if start > end {
            return Err(TripValidationError::DateOrder {
                start: start_raw.clone(),
                end: end_raw.clone(),
            });
        }
    }

    Ok(Trip {
        trip_uuid,
        user_uuid,
        name,
        start_date: start_date.map(|(raw, _)| raw),
        end_date: end_date.map(|(raw, _)| raw),
        destination,
        preferences: optional_text(fields, "preferences"),
        notes: optional_text(fields, "notes"),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// The shape pass has already rejected non-text values, so a present value
// here is always a string.
fn required_text(
    fields: &TripFields,
    field: &'static str,
) -> Result<String, TripValidationError> {
    match fields.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(TripValidationError::RequiredField { field }),
    }
}

fn optional_text(fields: &TripFields, field: &str) -> Option<String> {
    match fields.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn optional_date(
    fields: &TripFields,
    field: &'static str,
) -> Result<Option<(String, NaiveDate)>, TripValidationError> {
    let Some(Value::String(raw)) = fields.get(field) else {
        return Ok(None);
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(Some((raw.clone(), date))),
        Err(_) => Err(TripValidationError::InvalidDateFormat {
            field,
            value: raw.clone(),
        }),
    }
}
