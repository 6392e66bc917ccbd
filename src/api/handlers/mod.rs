use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::AppState;
use crate::models::*;
use crate::planner::{Command, DestinationId, DraftError, ItineraryDraft, TodoItem};
use crate::search;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
///
/// Validation errors from the db layer (e.g. "Itinerary not found" when
/// adding a destination) are safe to expose and are returned as-is with a
/// BAD_REQUEST status.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    let msg = e.to_string();

    if msg.contains("not found") {
        tracing::warn!("Validation error: {}", msg);
        return (StatusCode::BAD_REQUEST, msg);
    }

    tracing::error!("Internal error: {}", msg);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn draft_error(e: DraftError) -> (StatusCode, String) {
    match e {
        DraftError::NotFound => (StatusCode::NOT_FOUND, e.to_string()),
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Itineraries
// ============================================================

pub async fn list_itineraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Itinerary>>, (StatusCode, String)> {
    state
        .db
        .get_all_itineraries()
        .map(Json)
        .map_err(internal_error)
}

pub async fn get_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryWithDestinations>, (StatusCode, String)> {
    state
        .db
        .get_itinerary_with_destinations(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Itinerary not found".to_string()))
}

pub async fn create_itinerary(
    State(state): State<AppState>,
    Json(input): Json<CreateItineraryInput>,
) -> Result<(StatusCode, Json<Itinerary>), (StatusCode, String)> {
    state
        .db
        .create_itinerary(input)
        .map(|i| (StatusCode::CREATED, Json(i)))
        .map_err(internal_error)
}

pub async fn update_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateItineraryInput>,
) -> Result<Json<Itinerary>, (StatusCode, String)> {
    state
        .db
        .update_itinerary(id, input)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Itinerary not found".to_string()))
}

pub async fn delete_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.db.delete_itinerary(id).map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Itinerary not found".to_string()))
    }
}

// ============================================================
// Destinations
// ============================================================

pub async fn list_itinerary_destinations(
    State(state): State<AppState>,
    Path(itinerary_id): Path<Uuid>,
) -> Result<Json<Vec<Destination>>, (StatusCode, String)> {
    state
        .db
        .get_destinations_by_itinerary(itinerary_id)
        .map(Json)
        .map_err(internal_error)
}

pub async fn create_destination(
    State(state): State<AppState>,
    Path(itinerary_id): Path<Uuid>,
    Json(input): Json<CreateDestinationInput>,
) -> Result<(StatusCode, Json<Destination>), (StatusCode, String)> {
    state
        .db
        .create_destination(itinerary_id, input)
        .map(|d| (StatusCode::CREATED, Json(d)))
        .map_err(internal_error)
}

pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Destination>, (StatusCode, String)> {
    state
        .db
        .get_destination(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Destination not found".to_string()))
}

pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateDestinationInput>,
) -> Result<Json<Destination>, (StatusCode, String)> {
    state
        .db
        .update_destination(id, input)
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Destination not found".to_string()))
}

pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.db.delete_destination(id).map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Destination not found".to_string()))
    }
}

// ============================================================
// Activities
// ============================================================

pub async fn list_itinerary_activities(
    State(state): State<AppState>,
    Path(itinerary_id): Path<Uuid>,
) -> Result<Json<Vec<Activity>>, (StatusCode, String)> {
    state
        .db
        .get_activities_by_itinerary(itinerary_id)
        .map(Json)
        .map_err(internal_error)
}

pub async fn create_activity(
    State(state): State<AppState>,
    Path(itinerary_id): Path<Uuid>,
    Json(input): Json<CreateActivityInput>,
) -> Result<(StatusCode, Json<Activity>), (StatusCode, String)> {
    state
        .db
        .create_activity(itinerary_id, input)
        .map(|a| (StatusCode::CREATED, Json(a)))
        .map_err(internal_error)
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.db.delete_activity(id).map_err(internal_error)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, "Activity not found".to_string()))
    }
}

// ============================================================
// Bookings
// ============================================================

pub async fn list_flight_bookings(
    State(state): State<AppState>,
    Path(destination_id): Path<Uuid>,
) -> Result<Json<Vec<FlightBooking>>, (StatusCode, String)> {
    state
        .db
        .get_flight_bookings_by_destination(destination_id)
        .map(Json)
        .map_err(internal_error)
}

pub async fn create_flight_booking(
    State(state): State<AppState>,
    Path(destination_id): Path<Uuid>,
    Json(input): Json<CreateFlightBookingInput>,
) -> Result<(StatusCode, Json<FlightBooking>), (StatusCode, String)> {
    state
        .db
        .create_flight_booking(destination_id, input)
        .map(|b| (StatusCode::CREATED, Json(b)))
        .map_err(internal_error)
}

pub async fn list_hotel_bookings(
    State(state): State<AppState>,
    Path(destination_id): Path<Uuid>,
) -> Result<Json<Vec<HotelBooking>>, (StatusCode, String)> {
    state
        .db
        .get_hotel_bookings_by_destination(destination_id)
        .map(Json)
        .map_err(internal_error)
}

pub async fn create_hotel_booking(
    State(state): State<AppState>,
    Path(destination_id): Path<Uuid>,
    Json(input): Json<CreateHotelBookingInput>,
) -> Result<(StatusCode, Json<HotelBooking>), (StatusCode, String)> {
    state
        .db
        .create_hotel_booking(destination_id, input)
        .map(|b| (StatusCode::CREATED, Json(b)))
        .map_err(internal_error)
}

// ============================================================
// Comments
// ============================================================

pub async fn list_itinerary_comments(
    State(state): State<AppState>,
    Path(itinerary_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, (StatusCode, String)> {
    state
        .db
        .get_comments_by_itinerary(itinerary_id)
        .map(Json)
        .map_err(internal_error)
}

pub async fn create_comment(
    State(state): State<AppState>,
    Path(itinerary_id): Path<Uuid>,
    Json(input): Json<CreateCommentInput>,
) -> Result<(StatusCode, Json<Comment>), (StatusCode, String)> {
    state
        .db
        .create_comment(itinerary_id, input)
        .map(|c| (StatusCode::CREATED, Json(c)))
        .map_err(internal_error)
}

// ============================================================
// Search (mock suppliers)
// ============================================================

pub async fn search_flights(
    Json(request): Json<search::FlightSearchRequest>,
) -> Json<Vec<search::FlightOffer>> {
    Json(search::search_flights(&request))
}

pub async fn search_hotels(
    Json(request): Json<search::HotelSearchRequest>,
) -> Json<Vec<search::HotelOffer>> {
    Json(search::search_hotels(&request))
}

// ============================================================
// Draft editing sessions
// ============================================================

/// Input for opening a draft session. A recorded command history may be
/// supplied to resume a previously serialized draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDraftInput {
    #[serde(default)]
    pub history: Vec<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftCreated {
    pub id: Uuid,
}

pub async fn create_draft(
    State(state): State<AppState>,
    Json(input): Json<CreateDraftInput>,
) -> (StatusCode, Json<DraftCreated>) {
    let id = state.drafts.create(input.history);
    (StatusCode::CREATED, Json(DraftCreated { id }))
}

pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryDraft>, (StatusCode, String)> {
    state.drafts.snapshot(id).map(Json).map_err(draft_error)
}

pub async fn close_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .drafts
        .close(id)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(draft_error)
}

pub async fn dispatch_draft_command(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<Command>,
) -> Result<Json<ItineraryDraft>, (StatusCode, String)> {
    state
        .drafts
        .dispatch(id, command)
        .map(Json)
        .map_err(draft_error)
}

pub async fn undo_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryDraft>, (StatusCode, String)> {
    state.drafts.undo(id).map(Json).map_err(draft_error)
}

pub async fn redo_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryDraft>, (StatusCode, String)> {
    state.drafts.redo(id).map(Json).map_err(draft_error)
}

pub async fn list_draft_destination_todos(
    State(state): State<AppState>,
    Path((id, destination_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<TodoItem>>, (StatusCode, String)> {
    state
        .drafts
        .todos_for(id, DestinationId(destination_id))
        .map(Json)
        .map_err(draft_error)
}
