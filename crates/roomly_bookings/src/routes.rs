// --- File: crates/roomly_bookings/src/routes.rs ---

use crate::handlers::{
    admin_bookings_handler, admin_stats_handler, admin_users_handler, approve_booking_handler,
    cancel_booking_handler, create_booking_handler, dashboard_stats_handler,
    delete_booking_handler, get_booking_handler, my_bookings_handler, reject_booking_handler,
    update_booking_handler, BookingsState,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use roomly_auth::SessionKeys;
use roomly_config::AppConfig;
use roomly_store::MemoryStore;
use std::sync::Arc;

/// Creates a router containing the booking lifecycle, stats and admin
/// decision routes.
pub fn routes(config: Arc<AppConfig>, store: Arc<MemoryStore>) -> Router {
    let state = Arc::new(BookingsState {
        keys: SessionKeys::from_config(&config.auth),
        config,
        store,
    });

    Router::new()
        .route("/bookings", post(create_booking_handler))
        .route("/bookings/my", get(my_bookings_handler))
        .route("/bookings/{id}", get(get_booking_handler))
        .route("/bookings/{id}", patch(update_booking_handler))
        .route("/bookings/{id}", delete(delete_booking_handler))
        .route("/bookings/{id}/cancel", post(cancel_booking_handler))
        .route("/admin/bookings", get(admin_bookings_handler))
        .route("/admin/bookings/{id}/approve", post(approve_booking_handler))
        .route("/admin/bookings/{id}/reject", post(reject_booking_handler))
        .route("/admin/users", get(admin_users_handler))
        .route("/admin/stats", get(admin_stats_handler))
        .route("/stats/dashboard", get(dashboard_stats_handler))
        .with_state(state)
}
