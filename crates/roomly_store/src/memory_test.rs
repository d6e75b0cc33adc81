#[cfg(test)]
mod tests {
    use crate::memory::MemoryStore;
    use crate::repository::{
        BookingFilter, BookingRepository, RoomFilter, RoomRepository, UserRecord, UserRepository,
    };
    use crate::seed::demo_rooms;
    use crate::StoreError;
    use chrono::{Duration, Utc};
    use roomly_domain::{new_id, Booking, BookingStatus, Role, RoomStatus, User};

    fn record(name: &str, email: &str, role: Role) -> UserRecord {
        UserRecord {
            user: User {
                id: new_id(),
                name: name.to_string(),
                email: email.to_string(),
                phone: None,
                role,
                avatar: None,
                created_at: Utc::now(),
            },
            password_digest: "salt$digest".to_string(),
        }
    }

    fn booking(user_id: &str, room_id: &str, status: BookingStatus, age_minutes: i64) -> Booking {
        let start = Utc::now() + Duration::hours(24);
        Booking {
            id: new_id(),
            room_id: room_id.to_string(),
            user_id: user_id.to_string(),
            start_time: start,
            end_time: start + Duration::hours(2),
            purpose: "Sprint planning".to_string(),
            attendees: 4,
            status,
            total_price: 300_000,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected_case_insensitively() {
        let store = MemoryStore::new();
        store
            .create_user(record("A", "person@example.com", Role::User))
            .await
            .unwrap();
        let err = store
            .create_user(record("B", "Person@Example.COM", Role::User))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn test_user_lookup_by_email_returns_digest() {
        let store = MemoryStore::new();
        store
            .create_user(record("A", "person@example.com", Role::User))
            .await
            .unwrap();
        let found = store.user_by_email("person@example.com").await.unwrap();
        assert_eq!(found.unwrap().password_digest, "salt$digest");
        assert!(store.user_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_room_filters_compose() {
        let store = MemoryStore::new();
        for room in demo_rooms() {
            store.create_room(room).await.unwrap();
        }

        let available = store
            .rooms(RoomFilter {
                status: Some(RoomStatus::Available),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(available.len(), 5);

        let big_available = store
            .rooms(RoomFilter {
                status: Some(RoomStatus::Available),
                min_capacity: Some(25),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(big_available.len(), 3);

        let by_location = store
            .rooms(RoomFilter {
                search: Some("building b".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_location.len(), 2);
    }

    #[tokio::test]
    async fn test_room_paging_is_stable() {
        let store = MemoryStore::new();
        for room in demo_rooms() {
            store.create_room(room).await.unwrap();
        }

        let all = store.rooms(RoomFilter::default()).await.unwrap();
        let page = store
            .rooms(RoomFilter {
                limit: Some(2),
                offset: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, all[2].id);
        assert_eq!(page[1].id, all[3].id);
    }

    #[tokio::test]
    async fn test_update_missing_room_reports_not_found() {
        let store = MemoryStore::new();
        let mut room = demo_rooms().remove(0);
        room.id = "missing".to_string();
        let err = store.update_room(room).await.unwrap_err();
        assert_eq!(err, StoreError::not_found("room", "missing"));
    }

    #[tokio::test]
    async fn test_bookings_list_newest_first_with_filters() {
        let store = MemoryStore::new();
        let older = booking("u1", "r1", BookingStatus::Pending, 10);
        let newer = booking("u1", "r2", BookingStatus::Approved, 1);
        let foreign = booking("u2", "r1", BookingStatus::Pending, 5);
        for b in [&older, &newer, &foreign] {
            store.create_booking(b.clone()).await.unwrap();
        }

        let mine = store
            .bookings(BookingFilter {
                user_id: Some("u1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(
            mine.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
            vec![newer.id.as_str(), older.id.as_str()]
        );

        let pending_on_r1 = store
            .bookings(BookingFilter {
                status: Some(BookingStatus::Pending),
                room_id: Some("r1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(pending_on_r1.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_booking_reports_whether_it_existed() {
        let store = MemoryStore::new();
        let b = booking("u1", "r1", BookingStatus::Cancelled, 0);
        store.create_booking(b.clone()).await.unwrap();
        assert!(store.delete_booking(&b.id).await.unwrap());
        assert!(!store.delete_booking(&b.id).await.unwrap());
        assert!(store.booking_by_id(&b.id).await.unwrap().is_none());
    }
}
