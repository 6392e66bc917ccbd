use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stop on an itinerary, with travel dates and a booking status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: Uuid,
    pub itinerary_id: Uuid,
    pub name: String,
    /// City or region, e.g. `"Tokyo"`. Used as the search location for
    /// flights and hotels.
    pub location: String,
    pub arrival_date: String,
    pub departure_date: String,
    pub status: DestinationStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking progress of a destination.
///
/// - `Draft`: still being planned
/// - `Pending`: bookings requested, awaiting confirmation
/// - `Confirmed`: flights/hotels locked in
/// - `Cancelled`: dropped from the trip, kept for reference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DestinationStatus {
    Draft,
    Pending,
    Confirmed,
    Cancelled,
}

impl DestinationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Input for adding a destination to an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDestinationInput {
    pub name: String,
    pub location: String,
    pub arrival_date: String,
    pub departure_date: String,
    /// Initial status. Defaults to `Draft` if not specified.
    pub status: Option<DestinationStatus>,
}

/// Input for updating an existing destination. All fields are optional for
/// partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDestinationInput {
    pub name: Option<String>,
    pub location: Option<String>,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub status: Option<DestinationStatus>,
}
