// File: services/roomly_backend/src/main.rs
use roomly_backend::{app, seed_store};
use roomly_config::load_config;
use roomly_store::MemoryStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    roomly_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let store = Arc::new(MemoryStore::new());
    if config.seed_demo_data {
        info!("Seeding demo rooms and accounts");
        seed_store(&store).await;
    }

    let app = app(config.clone(), store);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
