// --- File: crates/roomly_domain/src/models.rs ---
//! Core entities: rooms, bookings, users.
//!
//! These are plain data carriers; the store owns persistence and the
//! handlers own authorization. Wire field names keep the original
//! contract's camelCase, status and role values stay SCREAMING.

use crate::lifecycle::BookingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Availability status of a room.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Maintenance,
    Unavailable,
}

impl RoomStatus {
    /// Only AVAILABLE rooms accept new bookings.
    pub fn is_bookable(self) -> bool {
        matches!(self, RoomStatus::Available)
    }
}

/// Role of an authenticated user. Closed enum so every gate has to match
/// exhaustively; adding a role forces a review of each match site.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

/// A reservable physical space.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Maximum attendee count; a hard ceiling on booking attendees.
    pub capacity: u32,
    /// Hourly rate in whole currency units, never negative.
    pub price_per_hour: i64,
    pub facilities: Vec<String>,
    /// Ordered image URLs, first one is the cover image.
    pub images: Vec<String>,
    pub status: RoomStatus,
    pub location: String,
    pub floor: i32,
    pub created_at: DateTime<Utc>,
}

/// The subset of room fields embedded in booking responses, matching the
/// original nested GraphQL selection.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub images: Vec<String>,
    pub location: String,
    pub floor: i32,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            name: room.name.clone(),
            images: room.images.clone(),
            location: room.location.clone(),
            floor: room.floor,
        }
    }
}

/// A user's request to reserve a room for a time interval.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: String,
    pub attendees: u32,
    pub status: BookingStatus,
    /// Derived: ceil(duration / 1h) × room.price_per_hour.
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

/// Identity record. Password digests live in the store, never here.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The subset of user fields embedded in admin booking listings.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Generate a fresh entity id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
