//! Wayfarer: a travel itinerary planning server.
//!
//! Persisted itineraries, destinations, activities, and comments live in a
//! local SQLite database behind [`db::Database`]. Interactive draft editing
//! with unlimited undo/redo happens in [`planner`], which derives state by
//! replaying a command log rather than mutating snapshots. [`api`] exposes
//! both over HTTP, alongside the mock supplier [`search`] endpoints.

pub mod api;
pub mod db;
pub mod models;
pub mod planner;
pub mod search;
