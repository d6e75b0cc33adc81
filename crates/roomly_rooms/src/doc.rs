// File: crates/roomly_rooms/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{DeleteResponse, RoomInput, RoomUpdateInput};
use roomly_domain::Room;
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/rooms",
    params(
        ("status" = Option<String>, Query, description = "AVAILABLE, MAINTENANCE or UNAVAILABLE"),
        ("min_capacity" = Option<u32>, Query, description = "Minimum room capacity"),
        ("search" = Option<String>, Query, description = "Substring match on name and location"),
        ("limit" = Option<usize>, Query, description = "Page size"),
        ("offset" = Option<usize>, Query, description = "Items to skip")
    ),
    responses(
        (status = 200, description = "Rooms matching the filter", body = Vec<Room>)
    )
)]
fn doc_list_rooms_handler() {}

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(("id" = String, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room", body = Room),
        (status = 404, description = "Room not found")
    )
)]
fn doc_get_room_handler() {}

#[utoipa::path(
    post,
    path = "/admin/rooms",
    request_body = RoomInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Room created", body = Room),
        (status = 400, description = "Invalid room fields"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required")
    )
)]
fn doc_create_room_handler() {}

#[utoipa::path(
    patch,
    path = "/admin/rooms/{id}",
    params(("id" = String, Path, description = "Room ID")),
    request_body = RoomUpdateInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 400, description = "Invalid room fields"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Room not found")
    )
)]
fn doc_update_room_handler() {}

#[utoipa::path(
    delete,
    path = "/admin/rooms/{id}",
    params(("id" = String, Path, description = "Room ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Room deleted", body = DeleteResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Room not found")
    )
)]
fn doc_delete_room_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_rooms_handler,
        doc_get_room_handler,
        doc_create_room_handler,
        doc_update_room_handler,
        doc_delete_room_handler
    ),
    components(schemas(RoomInput, RoomUpdateInput, DeleteResponse)),
    tags(
        (name = "rooms", description = "Room catalog and admin room management")
    ),
    servers(
        (url = "/api", description = "Roomly API server")
    )
)]
pub struct RoomsApiDoc;
