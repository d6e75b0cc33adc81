// --- File: crates/roomly_domain/src/lifecycle.rs ---
//! The booking status state machine.
//!
//! One exhaustive definition of the lifecycle, consumed by every handler
//! that mutates or renders booking actions. Transitions are monotonic:
//! nothing moves backward, and COMPLETED is terminal.
//!
//! ```text
//! PENDING ──→ APPROVED ──→ COMPLETED
//!    │  │         │
//!    │  └──→ REJECTED
//!    └─────┐      │
//!          ▼      ▼
//!      CANCELLED  (deleted once CANCELLED or REJECTED)
//! ```

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Rejected,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    /// The transition table. APPROVED → COMPLETED is admitted here but no
    /// Roomly code path drives it; completion is owned by a time-based
    /// backend sweep outside this codebase.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        match (self, next) {
            (Pending, Approved) | (Pending, Rejected) | (Pending, Cancelled) => true,
            (Approved, Cancelled) | (Approved, Completed) => true,
            // Terminal states and everything else, including self-loops.
            (Pending, _)
            | (Approved, _)
            | (Rejected, _)
            | (Cancelled, _)
            | (Completed, _) => false,
        }
    }

    /// The owner may still change times/attendees/purpose.
    pub fn can_edit(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Approved)
    }

    /// The owner (or an admin) may cancel.
    pub fn can_cancel(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Approved)
    }

    /// Only dead requests may be removed entirely.
    pub fn can_delete(self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Rejected)
    }

    /// Statuses an administrator decision can move a booking to.
    pub fn is_decidable(self) -> bool {
        matches!(self, BookingStatus::Pending)
    }
}

/// Why a requested transition is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move booking from {from:?} to {to:?}")]
pub struct TransitionError {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// Validate a transition, for callers that want an error value instead of
/// a boolean.
pub fn transition(
    from: BookingStatus,
    to: BookingStatus,
) -> Result<BookingStatus, TransitionError> {
    if from.can_transition_to(to) {
        Ok(to)
    } else {
        Err(TransitionError { from, to })
    }
}
