use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Destination;

/// A planned trip: the top-level container for destinations, activities,
/// and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Number of travelers.
    pub people: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItineraryInput {
    pub name: String,
    pub description: Option<String>,
    /// Number of travelers. Defaults to 1.
    pub people: Option<i64>,
}

/// Input for updating an existing itinerary. All fields are optional for
/// partial updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItineraryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub people: Option<i64>,
}

/// An itinerary with its destinations, used for detailed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryWithDestinations {
    #[serde(flatten)]
    pub itinerary: Itinerary,
    pub destinations: Vec<Destination>,
}
