// --- File: crates/roomly_auth/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod gate;
#[cfg(test)]
mod gate_test;
pub mod handlers;
pub mod password;
pub mod routes;
pub mod token;
#[cfg(test)]
mod token_test;

pub use gate::{
    as_response, gate, landing_for, require_admin, require_session, session_from_headers,
    GateDecision, RouteClass, ADMIN_LANDING, LOGIN_PATH, USER_LANDING,
};
pub use token::{Session, SessionKeys, TokenError};
