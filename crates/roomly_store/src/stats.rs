// --- File: crates/roomly_store/src/stats.rs ---
//! Statistics aggregation over the stored entities.
//!
//! The counting itself is pure over slices so it can be tested without a
//! store; [`crate::memory::MemoryStore`] wraps these in async queries.

use chrono::{DateTime, Utc};
use roomly_domain::{Booking, BookingStatus, Room, RoomStatus, User};
use serde::Serialize;

/// Per-user booking counters for the user dashboard.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_bookings: u64,
    pub active_bookings: u64,
    pub completed_bookings: u64,
    pub pending_bookings: u64,
    pub cancelled_bookings: u64,
}

/// System-wide counters for the admin dashboard.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_rooms: u64,
    pub total_bookings: u64,
    pub total_revenue: i64,
    pub pending_approvals: u64,
    pub active_bookings: u64,
    pub available_rooms: u64,
    /// Percentage of rooms with an APPROVED booking in progress at the
    /// evaluation instant, rounded to the nearest whole percent.
    pub occupancy_rate: u64,
}

/// Count a user's bookings by lifecycle bucket. "Active" means APPROVED.
pub fn dashboard_stats(bookings: &[Booking]) -> DashboardStats {
    let count = |status: BookingStatus| {
        bookings.iter().filter(|b| b.status == status).count() as u64
    };
    DashboardStats {
        total_bookings: bookings.len() as u64,
        active_bookings: count(BookingStatus::Approved),
        completed_bookings: count(BookingStatus::Completed),
        pending_bookings: count(BookingStatus::Pending),
        cancelled_bookings: count(BookingStatus::Cancelled),
    }
}

/// Aggregate the admin counters. Revenue sums APPROVED and COMPLETED
/// bookings; rejected and cancelled requests were never invoiced.
pub fn admin_stats(
    users: &[User],
    rooms: &[Room],
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> AdminStats {
    let count = |status: BookingStatus| {
        bookings.iter().filter(|b| b.status == status).count() as u64
    };
    let total_revenue = bookings
        .iter()
        .filter(|b| {
            matches!(b.status, BookingStatus::Approved | BookingStatus::Completed)
        })
        .map(|b| b.total_price)
        .sum();

    let occupied = rooms
        .iter()
        .filter(|room| {
            bookings.iter().any(|b| {
                b.room_id == room.id
                    && b.status == BookingStatus::Approved
                    && b.start_time <= now
                    && b.end_time > now
            })
        })
        .count();
    let occupancy_rate = if rooms.is_empty() {
        0
    } else {
        ((occupied as f64 / rooms.len() as f64) * 100.0).round() as u64
    };

    AdminStats {
        total_users: users.len() as u64,
        total_rooms: rooms.len() as u64,
        total_bookings: bookings.len() as u64,
        total_revenue,
        pending_approvals: count(BookingStatus::Pending),
        active_bookings: count(BookingStatus::Approved),
        available_rooms: rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Available)
            .count() as u64,
        occupancy_rate,
    }
}
