// --- File: crates/roomly_common/src/lib.rs ---
// Declare modules within this crate
pub mod error;
pub mod logging;

pub use error::{
    auth_error, conflict, forbidden, internal_error, not_found, validation_error, HttpStatusCode,
    RoomlyError,
};
