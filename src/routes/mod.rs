//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Route Organization
//!
//! - **`router`** - Main router creation and layer assembly
//! - **`user_routes`** - Auth endpoints and the public leaderboard
//! - **`trip_routes`** - Trip endpoints behind the auth middleware
//!
//! # Routes
//!
//! - `POST /user/signup` - User registration
//! - `POST /user/login` - User login
//! - `GET  /user/me` - Current user info
//! - `GET  /user/top-travelers` - Public leaderboard
//! - `GET  /user/trips` - List the authenticated user's trips
//! - `GET  /user/trips/total-distance` - Total distance travelled
//! - `POST /user/trips/add` - Record a trip

pub mod router;
pub mod trip_routes;
pub mod user_routes;

pub use router::create_router;
