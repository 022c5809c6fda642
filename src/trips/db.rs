//! Database operations for trips
//!
//! This module contains the trip model and the queries behind the trip
//! endpoints and the top-travelers leaderboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "trip_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    InProgress,
    Completed,
    Cancelled,
}

impl FromStr for TripStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Trip struct representing a trip in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Trip {
    pub id: i64,
    pub user_id: i64,
    pub fleet_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub distance_travelled: f64,
    pub duration_minutes: i32,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

/// Fields required to record a trip. The owner is taken from the
/// authenticated request context, never from the request body.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub fleet_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub distance_travelled: f64,
    pub duration_minutes: i32,
    pub status: TripStatus,
}

/// One row of the top-travelers leaderboard.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TravelerTotals {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub total_distance: Option<f64>,
}

/// Insert a trip for a user, returning the new trip id
pub async fn create_trip(pool: &PgPool, user_id: i64, trip: NewTrip) -> Result<i64, sqlx::Error> {
    let trip_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO trips (
            user_id, fleet_id, start_time, end_time,
            distance_travelled, duration_minutes, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(trip.fleet_id)
    .bind(trip.start_time)
    .bind(trip.end_time)
    .bind(trip.distance_travelled)
    .bind(trip.duration_minutes)
    .bind(trip.status)
    .fetch_one(pool)
    .await?;

    Ok(trip_id)
}

/// Get all trips belonging to a user
pub async fn trips_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Trip>, sqlx::Error> {
    let trips = sqlx::query_as::<_, Trip>(
        r#"
        SELECT id, user_id, fleet_id, start_time, end_time,
               distance_travelled, duration_minutes, status, created_at
        FROM trips
        WHERE user_id = $1
        ORDER BY start_time DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(trips)
}

/// Sum of a user's trip distances, 0 when the user has no trips
pub async fn total_distance_for_user(pool: &PgPool, user_id: i64) -> Result<f64, sqlx::Error> {
    let total: Option<f64> = sqlx::query_scalar(
        r#"
        SELECT SUM(distance_travelled) FROM trips WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(total.unwrap_or(0.0))
}

/// Top users by total distance over their completed trips
pub async fn top_travelers(pool: &PgPool, limit: i64) -> Result<Vec<TravelerTotals>, sqlx::Error> {
    let travelers = sqlx::query_as::<_, TravelerTotals>(
        r#"
        SELECT
            u.id,
            u.username,
            u.first_name,
            u.last_name,
            SUM(t.distance_travelled) AS total_distance
        FROM users u
        JOIN trips t ON u.id = t.user_id
        WHERE t.status = $1
        GROUP BY u.id, u.username, u.first_name, u.last_name
        ORDER BY total_distance DESC
        LIMIT $2
        "#,
    )
    .bind(TripStatus::Completed)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(travelers)
}
