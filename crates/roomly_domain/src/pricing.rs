// --- File: crates/roomly_domain/src/pricing.rs ---
//! The price/validity calculator.
//!
//! Given a candidate start/end pair, attendee count and the room's
//! capacity and hourly rate, produce either a validated quote or a
//! distinct rejection reason. Pure function of its inputs: the handlers
//! run it as the authoritative gate before any store write, and a client
//! can re-run it on every field change for a live price preview.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Milliseconds per billed hour; duration is rounded up to whole hours.
const MILLIS_PER_HOUR: i64 = 3_600_000;

// --- Error Handling ---
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("end time must be after start time")]
    EndBeforeOrEqualStart,
    #[error("attendees ({attendees}) exceed room capacity ({capacity})")]
    AttendeesExceedCapacity { attendees: u32, capacity: u32 },
    #[error("room capacity must be positive")]
    InvalidCapacity,
    #[error("price per hour must not be negative")]
    InvalidRate,
}

// --- Data Structures ---

/// A candidate booking as submitted, before validation. All fields are
/// optional because the calculator also reports which required field is
/// absent at submission time.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteRequest<'a> {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub purpose: Option<&'a str>,
    pub attendees: Option<u32>,
}

/// A validated quote: whole billed hours and the resulting price.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub duration_hours: i64,
    pub total_price: i64,
}

/// Validate a candidate booking against a room and compute its price.
///
/// Rejection order: missing fields first, then time ordering (regardless
/// of the other fields), then the capacity ceiling. An absent or zero
/// attendee count reports as a missing field so the `1 ≤ attendees`
/// invariant holds before the capacity comparison.
pub fn quote(
    request: &QuoteRequest<'_>,
    capacity: u32,
    price_per_hour: i64,
) -> Result<Quote, QuoteError> {
    let start = request.start_time.ok_or(QuoteError::MissingField("startTime"))?;
    let end = request.end_time.ok_or(QuoteError::MissingField("endTime"))?;
    match request.purpose {
        None => return Err(QuoteError::MissingField("purpose")),
        Some(p) if p.trim().is_empty() => return Err(QuoteError::MissingField("purpose")),
        Some(_) => {}
    }
    let attendees = match request.attendees {
        None | Some(0) => return Err(QuoteError::MissingField("attendees")),
        Some(n) => n,
    };

    if end <= start {
        return Err(QuoteError::EndBeforeOrEqualStart);
    }
    if capacity == 0 {
        return Err(QuoteError::InvalidCapacity);
    }
    if price_per_hour < 0 {
        return Err(QuoteError::InvalidRate);
    }
    if attendees > capacity {
        return Err(QuoteError::AttendeesExceedCapacity {
            attendees,
            capacity,
        });
    }

    let millis = end.signed_duration_since(start).num_milliseconds();
    let duration_hours = billed_hours(millis);
    Ok(Quote {
        duration_hours,
        total_price: duration_hours * price_per_hour,
    })
}

/// Round a positive millisecond duration up to whole billed hours.
fn billed_hours(millis: i64) -> i64 {
    debug_assert!(millis > 0);
    (millis + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR
}
