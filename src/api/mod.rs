mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;
use crate::planner::DraftRegistry;

/// Shared state behind every handler: the persistence layer plus the
/// in-memory draft sessions.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub drafts: DraftRegistry,
}

pub fn create_router(db: Database) -> Router {
    let state = AppState {
        db,
        drafts: DraftRegistry::new(),
    };

    let api = Router::new()
        // Itineraries
        .route("/itineraries", get(handlers::list_itineraries))
        .route("/itineraries", post(handlers::create_itinerary))
        .route("/itineraries/{id}", get(handlers::get_itinerary))
        .route("/itineraries/{id}", put(handlers::update_itinerary))
        .route("/itineraries/{id}", delete(handlers::delete_itinerary))
        .route("/itineraries/{id}/destinations", get(handlers::list_itinerary_destinations))
        .route("/itineraries/{id}/destinations", post(handlers::create_destination))
        .route("/itineraries/{id}/activities", get(handlers::list_itinerary_activities))
        .route("/itineraries/{id}/activities", post(handlers::create_activity))
        .route("/itineraries/{id}/comments", get(handlers::list_itinerary_comments))
        .route("/itineraries/{id}/comments", post(handlers::create_comment))
        // Destinations and activities (by their own id)
        .route("/destinations/{id}", get(handlers::get_destination))
        .route("/destinations/{id}", put(handlers::update_destination))
        .route("/destinations/{id}", delete(handlers::delete_destination))
        .route("/activities/{id}", delete(handlers::delete_activity))
        // Bookings recorded against a destination
        .route("/destinations/{id}/flight-bookings", get(handlers::list_flight_bookings))
        .route("/destinations/{id}/flight-bookings", post(handlers::create_flight_booking))
        .route("/destinations/{id}/hotel-bookings", get(handlers::list_hotel_bookings))
        .route("/destinations/{id}/hotel-bookings", post(handlers::create_hotel_booking))
        // Mock supplier search
        .route("/search/flights", post(handlers::search_flights))
        .route("/search/hotels", post(handlers::search_hotels))
        // Draft editing sessions
        .route("/drafts", post(handlers::create_draft))
        .route("/drafts/{id}", get(handlers::get_draft))
        .route("/drafts/{id}", delete(handlers::close_draft))
        .route("/drafts/{id}/commands", post(handlers::dispatch_draft_command))
        .route("/drafts/{id}/undo", post(handlers::undo_draft))
        .route("/drafts/{id}/redo", post(handlers::redo_draft))
        .route(
            "/drafts/{id}/destinations/{destination_id}/todos",
            get(handlers::list_draft_destination_todos),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
