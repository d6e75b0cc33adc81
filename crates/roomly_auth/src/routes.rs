// --- File: crates/roomly_auth/src/routes.rs ---

use crate::handlers::{login_handler, register_handler, AuthState};
use crate::token::SessionKeys;
use axum::{routing::post, Router};
use roomly_config::AppConfig;
use roomly_store::MemoryStore;
use std::sync::Arc;

/// Creates a router containing the authentication routes.
pub fn routes(config: Arc<AppConfig>, store: Arc<MemoryStore>) -> Router {
    let state = Arc::new(AuthState {
        keys: SessionKeys::from_config(&config.auth),
        config,
        store,
    });

    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .with_state(state)
}
