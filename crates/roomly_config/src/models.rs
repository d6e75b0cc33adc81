// --- File: crates/roomly_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Auth Config ---
// Holds session-token settings. The signing secret may also be supplied
// via the ROOMLY__AUTH__TOKEN_SECRET environment variable.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub token_secret: String,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: i64,
}

fn default_token_ttl() -> i64 {
    86_400 // one day
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    #[serde(default)]
    pub server: ServerConfig,

    pub auth: AuthConfig,

    // --- Runtime Flags (optional in config file) ---
    /// Populate the in-memory store with the demo room catalog and the
    /// demo admin/user accounts at startup.
    #[serde(default)]
    pub seed_demo_data: bool,
}
