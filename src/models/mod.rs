//! Persisted domain models for Wayfarer.
//!
//! # Core Concepts
//!
//! - [`Itinerary`]: a planned trip, the top-level container.
//! - [`Destination`]: a stop on an itinerary with travel dates and a
//!   booking [`DestinationStatus`].
//! - [`Activity`]: something scheduled during the trip, optionally tied to
//!   one destination.
//! - [`Comment`]: free-form notes on an itinerary.
//! - [`FlightBooking`] / [`HotelBooking`]: supplier selections recorded
//!   against a destination.
//!
//! These are the durable records behind the CRUD API. Draft editing with
//! undo/redo happens in [`crate::planner`] against in-memory state and only
//! touches these models when a caller persists the result.

mod activity;
mod booking;
mod comment;
mod destination;
mod itinerary;

pub use activity::*;
pub use booking::*;
pub use comment::*;
pub use destination::*;
pub use itinerary::*;
