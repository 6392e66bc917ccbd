use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flight selected for a destination, recorded from a search offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightBooking {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub airline: String,
    pub price: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub created_at: DateTime<Utc>,
}

/// Input for booking a flight against a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlightBookingInput {
    pub airline: String,
    pub price: i64,
    pub departure_time: String,
    pub arrival_time: String,
}

/// A hotel selected for a destination's stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelBooking {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub name: String,
    pub price: i64,
    pub check_in: String,
    pub check_out: String,
    pub created_at: DateTime<Utc>,
}

/// Input for booking a hotel against a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHotelBookingInput {
    pub name: String,
    pub price: i64,
    pub check_in: String,
    pub check_out: String,
}
