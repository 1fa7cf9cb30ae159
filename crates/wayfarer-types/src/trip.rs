//! Trip record types for Wayfarer.

use serde::{Deserialize, Serialize};

/// Raw trip fields as supplied by a caller, prior to validation.
///
/// Values stay as loose JSON so the validator can tell wrong-type input
/// apart from missing or empty input.
pub type TripFields = serde_json::Map<String, serde_json::Value>;

/// A validated travel record owned by a user.
///
/// `trip_uuid` is generated by the service on creation and immutable
/// thereafter. Dates are kept as validated `YYYY-MM-DD` strings, matching
/// the TEXT columns they are stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub trip_uuid: String,
    pub user_uuid: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub destination: String,
    pub preferences: Option<String>,
    pub notes: Option<String>,
}
