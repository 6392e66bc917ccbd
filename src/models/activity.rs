use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something scheduled during a trip, optionally tied to one destination.
///
/// An activity without a `destination_id` belongs to the itinerary as a
/// whole (e.g. a multi-city rail pass).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub itinerary_id: Uuid,
    pub destination_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

/// Input for scheduling an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityInput {
    pub destination_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
}
