//! Trips Module
//!
//! Trip recording and querying for authenticated users, plus the public
//! top-travelers leaderboard.
//!
//! - **`db`** - Trip model, status enum, and database operations
//! - **`handlers`** - HTTP handlers for the trip endpoints

pub mod db;
pub mod handlers;

pub use db::{NewTrip, Trip, TripStatus};
pub use handlers::{add_trip, get_top_travelers, list_trips, total_distance};
