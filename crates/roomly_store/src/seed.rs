// --- File: crates/roomly_store/src/seed.rs ---
//! Demo seed catalog.
//!
//! Mirrors the demo data set the original deployment shipped for running
//! without real inventory: six rooms and two accounts. Enabled via the
//! `seed_demo_data` config flag; password digesting is the caller's job
//! (the store never sees plaintext passwords).

use chrono::{Duration, Utc};
use once_cell::sync::Lazy;
use roomly_domain::{new_id, Role, Room, RoomStatus, User};

/// A seed account: the profile plus its demo plaintext password.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub user: User,
    pub password: &'static str,
}

static DEMO_ROOMS: Lazy<Vec<Room>> = Lazy::new(|| {
    let base = Utc::now();
    let room = |offset: i64,
                name: &str,
                description: &str,
                capacity: u32,
                price_per_hour: i64,
                facilities: &[&str],
                images: &[&str],
                status: RoomStatus,
                location: &str,
                floor: i32| Room {
        id: new_id(),
        name: name.to_string(),
        description: description.to_string(),
        capacity,
        price_per_hour,
        facilities: facilities.iter().map(|s| s.to_string()).collect(),
        images: images.iter().map(|s| s.to_string()).collect(),
        status,
        location: location.to_string(),
        floor,
        created_at: base - Duration::minutes(offset),
    };

    vec![
        room(
            6,
            "Meeting Room A",
            "Modern meeting room with full facilities for small to mid-sized teams",
            10,
            150_000,
            &["WiFi", "Projector", "Whiteboard", "AC", "TV Display"],
            &[
                "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800",
                "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=800",
            ],
            RoomStatus::Available,
            "Building A",
            2,
        ),
        room(
            5,
            "Conference Room B",
            "Large conference room for presentations and seminars",
            50,
            500_000,
            &["WiFi", "Projector", "Sound System", "AC", "Stage"],
            &["https://images.unsplash.com/photo-1505409859467-3a796fd5798e?w=800"],
            RoomStatus::Available,
            "Building B",
            3,
        ),
        room(
            4,
            "Training Room C",
            "Training room with large capacity and multimedia facilities",
            30,
            300_000,
            &["WiFi", "Projector", "Whiteboard", "AC", "Microphone"],
            &["https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=800"],
            RoomStatus::Available,
            "Building A",
            1,
        ),
        room(
            3,
            "Small Meeting Room D",
            "Small meeting room for team discussions or interviews",
            6,
            100_000,
            &["WiFi", "TV Display", "AC", "Whiteboard"],
            &["https://images.unsplash.com/photo-1556761175-4b46a572b786?w=800"],
            RoomStatus::Available,
            "Building A",
            3,
        ),
        room(
            2,
            "Executive Meeting Room",
            "Exclusive meeting room for executive-level meetings",
            8,
            400_000,
            &["WiFi", "4K TV", "Video Conference", "AC", "Coffee Machine"],
            &["https://images.unsplash.com/photo-1582653291997-079a1c04e5a1?w=800"],
            RoomStatus::Maintenance,
            "Building B",
            5,
        ),
        room(
            1,
            "Workshop Room",
            "Workshop room with a flexible layout for all kinds of sessions",
            25,
            250_000,
            &["WiFi", "Projector", "Sound System", "AC", "Movable Chairs"],
            &["https://images.unsplash.com/photo-1517502884422-41eaead166d4?w=800"],
            RoomStatus::Available,
            "Building C",
            1,
        ),
    ]
});

/// The demo room catalog. Each call returns fresh clones of the same six
/// rooms (ids are stable within a process run).
pub fn demo_rooms() -> Vec<Room> {
    DEMO_ROOMS.clone()
}

static DEMO_USERS: Lazy<Vec<SeedUser>> = Lazy::new(|| {
    let now = Utc::now();
    vec![
        SeedUser {
            user: User {
                id: new_id(),
                name: "Roomly Admin".to_string(),
                email: "admin@roomly.test".to_string(),
                phone: None,
                role: Role::Admin,
                avatar: None,
                created_at: now,
            },
            password: "admin123",
        },
        SeedUser {
            user: User {
                id: new_id(),
                name: "Demo User".to_string(),
                email: "user@roomly.test".to_string(),
                phone: Some("+6281234567890".to_string()),
                role: Role::User,
                avatar: None,
                created_at: now,
            },
            password: "user123",
        },
    ]
});

/// The demo accounts: one administrator and one regular user. Ids are
/// stable within a process run, like the room catalog.
pub fn demo_users() -> Vec<SeedUser> {
    DEMO_USERS.clone()
}
