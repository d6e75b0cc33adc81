// --- File: crates/roomly_domain/src/lib.rs ---
// Declare modules within this crate
pub mod lifecycle;
#[cfg(test)]
mod lifecycle_test;
pub mod models;
pub mod pricing;
#[cfg(test)]
mod pricing_proptest;

pub use lifecycle::{transition, BookingStatus, TransitionError};
pub use models::{new_id, Booking, Role, Room, RoomStatus, RoomSummary, User, UserSummary};
pub use pricing::{quote, Quote, QuoteError, QuoteRequest};
