// --- File: crates/roomly_auth/src/handlers.rs ---
use crate::gate::{as_response, landing_for};
use crate::password;
use crate::token::SessionKeys;
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use roomly_config::AppConfig;
use roomly_domain::{new_id, Role, User};
use roomly_store::{MemoryStore, StoreError, UserRecord, UserRepository};
use roomly_common::{auth_error, conflict, internal_error, validation_error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

// Define shared state needed by auth handlers
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AppConfig>,
    pub keys: SessionKeys,
    pub store: Arc<MemoryStore>,
}

// --- Data Structures ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    /// Role-chosen landing area the client should navigate to.
    pub redirect_to: &'static str,
}

/// Handler to create an account and open a session.
#[axum::debug_handler]
pub async fn register_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let email = request.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(as_response(validation_error("A valid email is required")));
    }
    if request.name.trim().is_empty() {
        return Err(as_response(validation_error("Name is required")));
    }
    if request.password.len() < 6 {
        return Err(as_response(validation_error(
            "Password must be at least 6 characters",
        )));
    }

    let user = User {
        id: new_id(),
        name: request.name.trim().to_string(),
        email,
        phone: request.phone.filter(|p| !p.trim().is_empty()),
        role: Role::User,
        avatar: None,
        created_at: Utc::now(),
    };
    let record = UserRecord {
        user,
        password_digest: password::digest(&request.password),
    };

    let user = match state.store.create_user(record).await {
        Ok(user) => user,
        Err(StoreError::DuplicateEmail(email)) => {
            return Err(as_response(conflict(format!(
                "An account with email {} already exists",
                email
            ))));
        }
        Err(e) => {
            warn!("Registration failed: {}", e);
            return Err(as_response(internal_error("Failed to create account")));
        }
    };

    info!("Registered account {} ({:?})", user.email, user.role);
    open_session(&state.keys, user)
}

/// Handler to authenticate with email/password and open a session.
#[axum::debug_handler]
pub async fn login_handler(
    State(state): State<Arc<AuthState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let invalid = || as_response(auth_error("Invalid email or password"));

    let record = state
        .store
        .user_by_email(request.email.trim())
        .await
        .map_err(|e| {
            warn!("Login lookup failed: {}", e);
            as_response(internal_error("Failed to look up account"))
        })?
        .ok_or_else(invalid)?;

    if !password::verify(&request.password, &record.password_digest) {
        return Err(invalid());
    }

    info!("Login for {} ({:?})", record.user.email, record.user.role);
    open_session(&state.keys, record.user)
}

fn open_session(
    keys: &SessionKeys,
    user: User,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let token = keys.issue(&user).map_err(|e| {
        warn!("Token issue failed: {}", e);
        as_response(internal_error("Failed to open session"))
    })?;
    let redirect_to = landing_for(user.role);
    Ok(Json(AuthResponse {
        token,
        user,
        redirect_to,
    }))
}
