/**
 * Trip Handlers
 *
 * This module implements the trip endpoints:
 *
 * - `GET  /user/trips` - all trips for the authenticated user
 * - `GET  /user/trips/total-distance` - sum of the user's trip distances
 * - `POST /user/trips/add` - record a new trip
 * - `GET  /user/top-travelers` - public leaderboard of completed distance
 *
 * The three `/user/trips` routes sit behind the auth middleware; the
 * authenticated subject arrives via the `AuthUser` extractor. The
 * leaderboard is public.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::trips::db::{
    create_trip, top_travelers, total_distance_for_user, trips_for_user, NewTrip, Trip, TripStatus,
};

/// How many travelers the leaderboard returns.
const TOP_TRAVELERS_LIMIT: i64 = 5;

/// Request body for POST /user/trips/add. Fields are optional at the serde
/// level so missing ones answer 400 with the required-field message.
#[derive(Deserialize, Serialize, Debug)]
pub struct AddTripRequest {
    pub fleet_id: Option<i64>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub distance_travelled: Option<f64>,
    pub duration_minutes: Option<i32>,
    /// One of `in_progress`, `completed`, `cancelled`
    pub status: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct TripsResponse {
    pub success: bool,
    pub message: String,
    pub trips: Vec<Trip>,
}

#[derive(Serialize, Debug)]
pub struct TotalDistanceResponse {
    pub success: bool,
    pub message: String,
    pub total_distance: f64,
    pub formatted_distance: String,
}

#[derive(Serialize, Debug)]
pub struct AddTripResponse {
    pub success: bool,
    pub message: String,
    pub trip_id: i64,
}

#[derive(Serialize, Debug)]
pub struct TravelerSummary {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub total_distance: f64,
    pub formatted_distance: String,
}

#[derive(Serialize, Debug)]
pub struct TopTravelersResponse {
    pub success: bool,
    pub message: String,
    pub travelers: Vec<TravelerSummary>,
}

/// List all trips for the authenticated user
pub async fn list_trips(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<TripsResponse>, ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    let trips = trips_for_user(pool, user.user_id).await?;

    Ok(Json(TripsResponse {
        success: true,
        message: "Trips retrieved successfully".to_string(),
        trips,
    }))
}

/// Total distance travelled by the authenticated user
pub async fn total_distance(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<TotalDistanceResponse>, ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    let total = total_distance_for_user(pool, user.user_id).await?;

    Ok(Json(TotalDistanceResponse {
        success: true,
        message: "Total distance retrieved successfully".to_string(),
        total_distance: total,
        formatted_distance: format!("{} km", total),
    }))
}

/// Record a new trip for the authenticated user
///
/// # Errors
///
/// * `400 Bad Request` - missing required fields, or unknown status value
pub async fn add_trip(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<AddTripRequest>,
) -> Result<(StatusCode, Json<AddTripResponse>), ApiError> {
    let (fleet_id, start_time, end_time, distance_travelled, duration_minutes, status) = match (
        request.fleet_id,
        request.start_time,
        request.end_time,
        request.distance_travelled,
        request.duration_minutes,
        request.status,
    ) {
        (Some(f), Some(s), Some(e), Some(d), Some(m), Some(st)) => (f, s, e, d, m, st),
        _ => {
            return Err(ApiError::bad_request(
                "Required fields: fleet_id, start_time, end_time, distance_travelled, duration_minutes, and status",
            ));
        }
    };

    let status: TripStatus = status.parse().map_err(|_| {
        ApiError::bad_request("Status must be one of: in_progress, completed, cancelled")
    })?;

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    let trip_id = create_trip(
        pool,
        user.user_id,
        NewTrip {
            fleet_id,
            start_time,
            end_time,
            distance_travelled,
            duration_minutes,
            status,
        },
    )
    .await?;

    tracing::info!("Trip {} added for user {}", trip_id, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(AddTripResponse {
            success: true,
            message: "Trip added successfully".to_string(),
            trip_id,
        }),
    ))
}

/// Public leaderboard: top users by completed trip distance
pub async fn get_top_travelers(
    State(state): State<AppState>,
) -> Result<Json<TopTravelersResponse>, ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    let travelers = top_travelers(pool, TOP_TRAVELERS_LIMIT)
        .await?
        .into_iter()
        .map(|t| {
            let total = t.total_distance.unwrap_or(0.0);
            TravelerSummary {
                id: t.id,
                username: t.username,
                first_name: t.first_name,
                last_name: t.last_name,
                total_distance: total,
                formatted_distance: format!("{:.2} km", total),
            }
        })
        .collect();

    Ok(Json(TopTravelersResponse {
        success: true,
        message: "Top travelers retrieved successfully".to_string(),
        travelers,
    }))
}
