// --- File: crates/roomly_config/src/lib.rs ---
//! Configuration loading for the Roomly application.
//!
//! Configuration is assembled from three layers, later layers winning:
//! built-in defaults, an optional `roomly.toml` file (path overridable via
//! `ROOMLY_CONFIG`), and `ROOMLY__`-prefixed environment variables using
//! `__` as the section separator (e.g. `ROOMLY__SERVER__PORT=9090`).

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

pub mod models;
pub use models::{AppConfig, AuthConfig, ServerConfig};

/// The prefix for configuration environment variables
pub const ENV_PREFIX: &str = "ROOMLY";

/// The separator for configuration environment variables
pub const ENV_SEPARATOR: &str = "__";

static DOTENV: OnceCell<()> = OnceCell::new();

/// Load `.env` into the process environment exactly once.
///
/// Dependent crates call this so they do not need to know whether the
/// binary already did.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        let _ = dotenv::dotenv();
    });
}

/// Loads the application configuration.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_file =
        std::env::var("ROOMLY_CONFIG").unwrap_or_else(|_| "roomly".to_string());
    debug!("Loading configuration (file base: {})", config_file);

    let config = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        // Development fallback only; deployments override via
        // ROOMLY__AUTH__TOKEN_SECRET or the config file.
        .set_default("auth.token_secret", "roomly-dev-secret")?
        .set_default("auth.token_ttl_seconds", 86_400)?
        .set_default("seed_demo_data", true)?
        .add_source(File::with_name(&config_file).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
        .build()?;

    config.try_deserialize()
}
