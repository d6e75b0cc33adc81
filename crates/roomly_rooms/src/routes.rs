// --- File: crates/roomly_rooms/src/routes.rs ---

use crate::handlers::{
    create_room_handler, delete_room_handler, get_room_handler, list_rooms_handler,
    update_room_handler, RoomsState,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use roomly_auth::SessionKeys;
use roomly_config::AppConfig;
use roomly_store::MemoryStore;
use std::sync::Arc;

/// Creates a router containing the room catalog and admin room routes.
pub fn routes(config: Arc<AppConfig>, store: Arc<MemoryStore>) -> Router {
    let state = Arc::new(RoomsState {
        keys: SessionKeys::from_config(&config.auth),
        config,
        store,
    });

    Router::new()
        .route("/rooms", get(list_rooms_handler))
        .route("/rooms/{id}", get(get_room_handler))
        .route("/admin/rooms", post(create_room_handler))
        .route("/admin/rooms/{id}", patch(update_room_handler))
        .route("/admin/rooms/{id}", delete(delete_room_handler))
        .with_state(state)
}
