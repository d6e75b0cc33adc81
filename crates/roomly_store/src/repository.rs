// --- File: crates/roomly_store/src/repository.rs ---
//! Repository traits for data access.
//!
//! These traits keep the handler crates agnostic of the concrete store.
//! Per the application's scope there is no local database engine; the
//! shipped implementation is [`crate::memory::MemoryStore`], but anything
//! implementing these traits can stand in (tests use them directly).

use crate::error::StoreError;
use roomly_domain::{Booking, BookingStatus, Room, RoomStatus, User};
use std::future::Future;

/// A user plus its store-only secrets. The `User` half is what handlers
/// may serialize; the digest never leaves the store layer.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_digest: String,
}

/// Filter for room listings; all fields optional, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub min_capacity: Option<u32>,
    /// Case-insensitive substring match on name and location.
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Filter for booking listings; all fields optional, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub room_id: Option<String>,
    pub user_id: Option<String>,
}

pub trait UserRepository {
    /// Store a new account. Fails with [`StoreError::DuplicateEmail`] when
    /// the email is already registered.
    fn create_user(
        &self,
        record: UserRecord,
    ) -> impl Future<Output = Result<User, StoreError>> + Send;

    fn user_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Lookup by email, returning the record with the password digest for
    /// credential verification.
    fn user_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<UserRecord>, StoreError>> + Send;

    fn users(&self) -> impl Future<Output = Result<Vec<User>, StoreError>> + Send;
}

pub trait RoomRepository {
    fn create_room(&self, room: Room) -> impl Future<Output = Result<Room, StoreError>> + Send;

    fn room_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Room>, StoreError>> + Send;

    fn rooms(
        &self,
        filter: RoomFilter,
    ) -> impl Future<Output = Result<Vec<Room>, StoreError>> + Send;

    /// Replace the stored room with the same id.
    fn update_room(&self, room: Room) -> impl Future<Output = Result<Room, StoreError>> + Send;

    /// Returns `true` if a room was removed, `false` if it was not found.
    fn delete_room(&self, id: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

pub trait BookingRepository {
    fn create_booking(
        &self,
        booking: Booking,
    ) -> impl Future<Output = Result<Booking, StoreError>> + Send;

    fn booking_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Booking>, StoreError>> + Send;

    /// Newest-first listing matching the filter.
    fn bookings(
        &self,
        filter: BookingFilter,
    ) -> impl Future<Output = Result<Vec<Booking>, StoreError>> + Send;

    /// Replace the stored booking with the same id.
    fn update_booking(
        &self,
        booking: Booking,
    ) -> impl Future<Output = Result<Booking, StoreError>> + Send;

    /// Returns `true` if a booking was removed, `false` if it was not found.
    fn delete_booking(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
