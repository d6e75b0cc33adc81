#[cfg(test)]
mod tests {
    use crate::handlers::{
        create_room_handler, delete_room_handler, get_room_handler, list_rooms_handler,
        update_room_handler, ListRoomsQuery, RoomInput, RoomUpdateInput, RoomsState,
    };
    use axum::extract::{Path, Query, State};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::Json;
    use roomly_auth::SessionKeys;
    use roomly_config::{AppConfig, AuthConfig, ServerConfig};
    use roomly_domain::{Role, RoomStatus};
    use roomly_store::{seed, MemoryStore, RoomRepository};
    use std::sync::Arc;

    async fn state() -> Arc<RoomsState> {
        let config = Arc::new(AppConfig {
            server: ServerConfig::default(),
            auth: AuthConfig {
                token_secret: "rooms-test-secret".to_string(),
                token_ttl_seconds: 3600,
            },
            seed_demo_data: true,
        });
        let store = Arc::new(MemoryStore::new());
        for room in seed::demo_rooms() {
            store.create_room(room).await.unwrap();
        }
        Arc::new(RoomsState {
            keys: SessionKeys::from_config(&config.auth),
            config,
            store,
        })
    }

    fn bearer(state: &RoomsState, role: Role) -> HeaderMap {
        let seeded = seed::demo_users()
            .into_iter()
            .find(|s| s.user.role == role)
            .unwrap();
        let token = state.keys.issue(&seeded.user).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        headers
    }

    fn room_input(name: &str) -> RoomInput {
        RoomInput {
            name: name.to_string(),
            description: "A new space".to_string(),
            capacity: 8,
            price_per_hour: 120_000,
            facilities: vec!["WiFi".to_string()],
            images: vec![],
            status: None,
            location: "Building C".to_string(),
            floor: 1,
        }
    }

    #[tokio::test]
    async fn test_list_rooms_is_public_and_filters() {
        let state = state().await;

        let Json(all) = list_rooms_handler(State(state.clone()), Query(ListRoomsQuery::default()))
            .await
            .unwrap();
        assert_eq!(all.len(), 6);

        let Json(available) = list_rooms_handler(
            State(state),
            Query(ListRoomsQuery {
                status: Some(RoomStatus::Available),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(available.len(), 5);
        assert!(available.iter().all(|r| r.status == RoomStatus::Available));
    }

    #[tokio::test]
    async fn test_get_room_detail_and_not_found() {
        let state = state().await;
        let Json(all) = list_rooms_handler(State(state.clone()), Query(ListRoomsQuery::default()))
            .await
            .unwrap();

        let Json(room) = get_room_handler(State(state.clone()), Path(all[0].id.clone()))
            .await
            .unwrap();
        assert_eq!(room.id, all[0].id);

        let err = get_room_handler(State(state), Path("missing".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        // The message points back to the catalog listing.
        assert!(err.1.contains("/rooms"));
    }

    #[tokio::test]
    async fn test_create_room_is_admin_only() {
        let state = state().await;

        let err = create_room_handler(
            State(state.clone()),
            HeaderMap::new(),
            Json(room_input("Unauthorized Room")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);

        let err = create_room_handler(
            State(state.clone()),
            bearer(&state, Role::User),
            Json(room_input("Forbidden Room")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);

        let Json(created) = create_room_handler(
            State(state.clone()),
            bearer(&state, Role::Admin),
            Json(room_input("Workshop Room")),
        )
        .await
        .unwrap();
        assert_eq!(created.status, RoomStatus::Available);

        let Json(fetched) = get_room_handler(State(state), Path(created.id.clone()))
            .await
            .unwrap();
        assert_eq!(fetched.name, "Workshop Room");
    }

    #[tokio::test]
    async fn test_create_room_validates_fields() {
        let state = state().await;
        let admin = bearer(&state, Role::Admin);

        let mut input = room_input("  ");
        let err = create_room_handler(State(state.clone()), admin.clone(), Json(input))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);

        input = room_input("Zero Cap");
        input.capacity = 0;
        let err = create_room_handler(State(state.clone()), admin.clone(), Json(input))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);

        input = room_input("Negative Rate");
        input.price_per_hour = -1;
        let err = create_room_handler(State(state), admin, Json(input))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_room_merges_supplied_fields() {
        let state = state().await;
        let admin = bearer(&state, Role::Admin);
        let Json(created) = create_room_handler(
            State(state.clone()),
            admin.clone(),
            Json(room_input("Before Edit")),
        )
        .await
        .unwrap();

        let Json(updated) = update_room_handler(
            State(state.clone()),
            Path(created.id.clone()),
            admin.clone(),
            Json(RoomUpdateInput {
                status: Some(RoomStatus::Maintenance),
                price_per_hour: Some(175_000),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated.status, RoomStatus::Maintenance);
        assert_eq!(updated.price_per_hour, 175_000);
        assert_eq!(updated.name, "Before Edit");
        assert_eq!(updated.capacity, created.capacity);

        let err = update_room_handler(
            State(state),
            Path("missing".to_string()),
            admin,
            Json(RoomUpdateInput::default()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_room_reports_success_once() {
        let state = state().await;
        let admin = bearer(&state, Role::Admin);
        let Json(created) = create_room_handler(
            State(state.clone()),
            admin.clone(),
            Json(room_input("Doomed Room")),
        )
        .await
        .unwrap();

        let Json(response) = delete_room_handler(
            State(state.clone()),
            Path(created.id.clone()),
            admin.clone(),
        )
        .await
        .unwrap();
        assert!(response.success);

        let err = delete_room_handler(State(state), Path(created.id), admin)
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
