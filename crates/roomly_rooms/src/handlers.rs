// --- File: crates/roomly_rooms/src/handlers.rs ---
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use chrono::Utc;
use roomly_auth::{as_response, require_admin, SessionKeys};
use roomly_common::{internal_error, not_found, validation_error};
use roomly_config::AppConfig;
use roomly_domain::{new_id, Room, RoomStatus};
use roomly_store::{MemoryStore, RoomFilter, RoomRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

// Define shared state needed by room handlers
#[derive(Clone)]
pub struct RoomsState {
    pub config: Arc<AppConfig>,
    pub keys: SessionKeys,
    pub store: Arc<MemoryStore>,
}

// --- Data Structures ---

/// Query parameters for the room listing; all optional, ANDed together.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
pub struct ListRoomsQuery {
    pub status: Option<RoomStatus>,
    pub min_capacity: Option<u32>,
    /// Case-insensitive substring match on name and location.
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Payload for admin room creation.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: u32,
    pub price_per_hour: i64,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: Option<RoomStatus>,
    pub location: String,
    #[serde(default)]
    pub floor: i32,
}

/// Payload for admin room edits; only the supplied fields change.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<u32>,
    pub price_per_hour: Option<i64>,
    pub facilities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub status: Option<RoomStatus>,
    pub location: Option<String>,
    pub floor: Option<i32>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

// --- Handlers ---

/// Handler to list rooms, optionally filtered. Public.
#[axum::debug_handler]
pub async fn list_rooms_handler(
    State(state): State<Arc<RoomsState>>,
    Query(query): Query<ListRoomsQuery>,
) -> Result<Json<Vec<Room>>, (StatusCode, String)> {
    let filter = RoomFilter {
        status: query.status,
        min_capacity: query.min_capacity,
        search: query.search,
        limit: query.limit,
        offset: query.offset,
    };
    let rooms = state.store.rooms(filter).await.map_err(|e| {
        warn!("Room listing failed: {}", e);
        as_response(internal_error("Failed to list rooms"))
    })?;
    Ok(Json(rooms))
}

/// Handler to fetch one room by id. Public.
#[axum::debug_handler]
pub async fn get_room_handler(
    State(state): State<Arc<RoomsState>>,
    Path(room_id): Path<String>,
) -> Result<Json<Room>, (StatusCode, String)> {
    let room = state.store.room_by_id(&room_id).await.map_err(|e| {
        warn!("Room lookup failed: {}", e);
        as_response(internal_error("Failed to look up room"))
    })?;
    match room {
        Some(room) => Ok(Json(room)),
        // The client shows this next to a link back to the catalog.
        None => Err(as_response(not_found(format!(
            "Room {} not found; browse the catalog at /rooms",
            room_id
        )))),
    }
}

/// Handler for admins to add a room to the catalog.
#[axum::debug_handler]
pub async fn create_room_handler(
    State(state): State<Arc<RoomsState>>,
    headers: HeaderMap,
    Json(input): Json<RoomInput>,
) -> Result<Json<Room>, (StatusCode, String)> {
    let session = require_admin(&state.keys, &headers)?;
    validate_room_fields(&input.name, input.capacity, input.price_per_hour)?;

    let room = Room {
        id: new_id(),
        name: input.name.trim().to_string(),
        description: input.description,
        capacity: input.capacity,
        price_per_hour: input.price_per_hour,
        facilities: input.facilities,
        images: input.images,
        status: input.status.unwrap_or(RoomStatus::Available),
        location: input.location,
        floor: input.floor,
        created_at: Utc::now(),
    };
    let room = state.store.create_room(room).await.map_err(|e| {
        warn!("Room creation failed: {}", e);
        as_response(internal_error("Failed to create room"))
    })?;

    info!("Admin {} created room {} ({})", session.user_id, room.id, room.name);
    Ok(Json(room))
}

/// Handler for admins to edit a room. Unsupplied fields are kept.
#[axum::debug_handler]
pub async fn update_room_handler(
    State(state): State<Arc<RoomsState>>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<RoomUpdateInput>,
) -> Result<Json<Room>, (StatusCode, String)> {
    let session = require_admin(&state.keys, &headers)?;

    let mut room = state
        .store
        .room_by_id(&room_id)
        .await
        .map_err(|e| {
            warn!("Room lookup failed: {}", e);
            as_response(internal_error("Failed to look up room"))
        })?
        .ok_or_else(|| as_response(not_found(format!("Room {} not found", room_id))))?;

    if let Some(name) = input.name {
        room.name = name;
    }
    if let Some(description) = input.description {
        room.description = description;
    }
    if let Some(capacity) = input.capacity {
        room.capacity = capacity;
    }
    if let Some(price_per_hour) = input.price_per_hour {
        room.price_per_hour = price_per_hour;
    }
    if let Some(facilities) = input.facilities {
        room.facilities = facilities;
    }
    if let Some(images) = input.images {
        room.images = images;
    }
    if let Some(status) = input.status {
        room.status = status;
    }
    if let Some(location) = input.location {
        room.location = location;
    }
    if let Some(floor) = input.floor {
        room.floor = floor;
    }
    validate_room_fields(&room.name, room.capacity, room.price_per_hour)?;

    let room = state.store.update_room(room).await.map_err(|e| {
        warn!("Room update failed: {}", e);
        as_response(internal_error("Failed to update room"))
    })?;

    info!("Admin {} updated room {}", session.user_id, room.id);
    Ok(Json(room))
}

/// Handler for admins to remove a room from the catalog.
#[axum::debug_handler]
pub async fn delete_room_handler(
    State(state): State<Arc<RoomsState>>,
    Path(room_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, (StatusCode, String)> {
    let session = require_admin(&state.keys, &headers)?;

    let removed = state.store.delete_room(&room_id).await.map_err(|e| {
        warn!("Room deletion failed: {}", e);
        as_response(internal_error("Failed to delete room"))
    })?;
    if !removed {
        return Err(as_response(not_found(format!("Room {} not found", room_id))));
    }

    info!("Admin {} deleted room {}", session.user_id, room_id);
    Ok(Json(DeleteResponse {
        success: true,
        message: "Room deleted".to_string(),
    }))
}

fn validate_room_fields(
    name: &str,
    capacity: u32,
    price_per_hour: i64,
) -> Result<(), (StatusCode, String)> {
    if name.trim().is_empty() {
        return Err(as_response(validation_error("Room name is required")));
    }
    if capacity == 0 {
        return Err(as_response(validation_error("Capacity must be at least 1")));
    }
    if price_per_hour < 0 {
        return Err(as_response(validation_error(
            "Hourly price must not be negative",
        )));
    }
    Ok(())
}
