// --- File: crates/roomly_store/src/memory.rs ---
//! In-memory store.
//!
//! Backing state is a trio of `RwLock`-guarded maps. Every operation is a
//! single lock acquisition; there is no cross-entity transaction, matching
//! the one-request-per-mutation model of the application.

use crate::error::StoreError;
use crate::repository::{
    BookingFilter, BookingRepository, RoomFilter, RoomRepository, UserRecord, UserRepository,
};
use crate::stats::{admin_stats, dashboard_stats, AdminStats, DashboardStats};
use chrono::{DateTime, Utc};
use roomly_domain::{Booking, Room, User};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
    rooms: RwLock<HashMap<String, Room>>,
    bookings: RwLock<HashMap<String, Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-caller dashboard counters.
    pub async fn dashboard_stats_for(&self, user_id: &str) -> DashboardStats {
        let bookings = self.bookings.read().await;
        let mine: Vec<Booking> = bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        dashboard_stats(&mine)
    }

    /// System-wide admin counters, evaluated at `now`.
    pub async fn admin_stats_at(&self, now: DateTime<Utc>) -> AdminStats {
        let users: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .map(|r| r.user.clone())
            .collect();
        let rooms: Vec<Room> = self.rooms.read().await.values().cloned().collect();
        let bookings: Vec<Booking> = self.bookings.read().await.values().cloned().collect();
        admin_stats(&users, &rooms, &bookings, now)
    }
}

impl UserRepository for MemoryStore {
    async fn create_user(&self, record: UserRecord) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let email = record.user.email.to_ascii_lowercase();
        if users
            .values()
            .any(|r| r.user.email.eq_ignore_ascii_case(&email))
        {
            return Err(StoreError::DuplicateEmail(record.user.email));
        }
        debug!("Storing user {} ({})", record.user.id, record.user.email);
        let user = record.user.clone();
        users.insert(record.user.id.clone(), record);
        Ok(user)
    }

    async fn user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).map(|r| r.user.clone()))
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|r| r.user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn users(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .map(|r| r.user.clone())
            .collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }
}

impl RoomRepository for MemoryStore {
    async fn create_room(&self, room: Room) -> Result<Room, StoreError> {
        debug!("Storing room {} ({})", room.id, room.name);
        self.rooms
            .write()
            .await
            .insert(room.id.clone(), room.clone());
        Ok(room)
    }

    async fn room_by_id(&self, id: &str) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.read().await.get(id).cloned())
    }

    async fn rooms(&self, filter: RoomFilter) -> Result<Vec<Room>, StoreError> {
        let rooms = self.rooms.read().await;
        let search = filter.search.as_ref().map(|s| s.to_lowercase());
        let mut matching: Vec<Room> = rooms
            .values()
            .filter(|room| {
                filter.status.is_none_or(|s| room.status == s)
                    && filter.min_capacity.is_none_or(|c| room.capacity >= c)
                    && search.as_ref().is_none_or(|needle| {
                        room.name.to_lowercase().contains(needle)
                            || room.location.to_lowercase().contains(needle)
                    })
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let offset = filter.offset.unwrap_or(0);
        let limit = filter.limit.unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }

    async fn update_room(&self, room: Room) -> Result<Room, StoreError> {
        let mut rooms = self.rooms.write().await;
        if !rooms.contains_key(&room.id) {
            return Err(StoreError::not_found("room", room.id));
        }
        rooms.insert(room.id.clone(), room.clone());
        Ok(room)
    }

    async fn delete_room(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.rooms.write().await.remove(id).is_some())
    }
}

impl BookingRepository for MemoryStore {
    async fn create_booking(&self, booking: Booking) -> Result<Booking, StoreError> {
        debug!(
            "Storing booking {} for room {} ({:?})",
            booking.id, booking.room_id, booking.status
        );
        self.bookings
            .write()
            .await
            .insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    async fn booking_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.read().await.get(id).cloned())
    }

    async fn bookings(&self, filter: BookingFilter) -> Result<Vec<Booking>, StoreError> {
        let bookings = self.bookings.read().await;
        let mut matching: Vec<Booking> = bookings
            .values()
            .filter(|b| {
                filter.status.is_none_or(|s| b.status == s)
                    && filter.room_id.as_ref().is_none_or(|id| &b.room_id == id)
                    && filter.user_id.as_ref().is_none_or(|id| &b.user_id == id)
            })
            .cloned()
            .collect();
        // Newest first, id as the tiebreaker for a stable order.
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(matching)
    }

    async fn update_booking(&self, booking: Booking) -> Result<Booking, StoreError> {
        let mut bookings = self.bookings.write().await;
        if !bookings.contains_key(&booking.id) {
            return Err(StoreError::not_found("booking", booking.id));
        }
        bookings.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    async fn delete_booking(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.bookings.write().await.remove(id).is_some())
    }
}
