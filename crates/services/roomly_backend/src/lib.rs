// File: services/roomly_backend/src/lib.rs
//! Router assembly and store seeding for the Roomly API server.
//!
//! Kept in a library so the integration tests can drive the exact app
//! the binary serves.

use axum::{routing::get, Router};
use roomly_auth::password;
use roomly_config::AppConfig;
use roomly_store::{MemoryStore, RoomRepository, UserRecord, UserRepository};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Populate a store with the demo room catalog and demo accounts.
pub async fn seed_store(store: &MemoryStore) {
    for room in roomly_store::seed::demo_rooms() {
        if let Err(e) = store.create_room(room).await {
            warn!("Skipping seed room: {}", e);
        }
    }
    for seeded in roomly_store::seed::demo_users() {
        let record = UserRecord {
            password_digest: password::digest(seeded.password),
            user: seeded.user,
        };
        match store.create_user(record).await {
            Ok(user) => info!("Seeded account {} ({:?})", user.email, user.role),
            Err(e) => warn!("Skipping seed account: {}", e),
        }
    }
}

/// Build the full application router: every feature router nested under
/// `/api`, plus Swagger UI when the `openapi` feature is on.
pub fn app(config: Arc<AppConfig>, store: Arc<MemoryStore>) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Roomly API!" }))
        .merge(roomly_auth::routes::routes(config.clone(), store.clone()))
        .merge(roomly_rooms::routes::routes(config.clone(), store.clone()))
        .merge(roomly_bookings::routes::routes(config, store));

    #[allow(unused_mut)] // openapi adds the Swagger UI routes
    let mut app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use roomly_auth::doc::AuthApiDoc;
        use roomly_bookings::doc::BookingsApiDoc;
        use roomly_rooms::doc::RoomsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Roomly API",
                version = "0.1.0",
                description = "Room booking service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Roomly", description = "Room booking endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AuthApiDoc::openapi());
        openapi_doc.merge(RoomsApiDoc::openapi());
        openapi_doc.merge(BookingsApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    app
}
