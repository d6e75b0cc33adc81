// --- File: crates/roomly_auth/src/gate.rs ---
//! The session/role gate.
//!
//! One pure decision function covers every route class; the HTTP guards
//! below project its decisions onto status codes and carry the redirect
//! target in the response body, the way the SPA client consumes them.
//! `Role` is a closed enum, so adding a role fails compilation at each
//! match site here until the gate is reviewed.

use crate::token::{Session, SessionKeys};
use axum::http::{header, HeaderMap, StatusCode};
use roomly_common::{auth_error, forbidden, HttpStatusCode, RoomlyError};
use roomly_domain::Role;

/// Where an unauthenticated caller is sent.
pub const LOGIN_PATH: &str = "/login";
/// Landing area for authenticated regular users.
pub const USER_LANDING: &str = "/dashboard";
/// Landing area for administrators.
pub const ADMIN_LANDING: &str = "/admin";

/// Access class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without a session.
    Public,
    /// Any authenticated user.
    Protected,
    /// Administrators only.
    AdminOnly,
}

/// Outcome of gating one request against one route class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectToLogin,
    RedirectToUserLanding,
}

/// Decide whether a session may reach a route class.
pub fn gate(route: RouteClass, session: Option<&Session>) -> GateDecision {
    match (route, session) {
        (RouteClass::Public, _) => GateDecision::Allow,
        (RouteClass::Protected | RouteClass::AdminOnly, None) => GateDecision::RedirectToLogin,
        (RouteClass::Protected, Some(_)) => GateDecision::Allow,
        (RouteClass::AdminOnly, Some(session)) => match session.role {
            Role::Admin => GateDecision::Allow,
            Role::User => GateDecision::RedirectToUserLanding,
        },
    }
}

/// The landing area chosen by role after a successful login/register.
pub fn landing_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LANDING,
        Role::User => USER_LANDING,
    }
}

/// Extract the bearer session from request headers, if any. A missing,
/// malformed, or expired token is simply "no session".
pub fn session_from_headers(keys: &SessionKeys, headers: &HeaderMap) -> Option<Session> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    keys.verify(token).ok()
}

/// Guard for protected routes: the session, or 401 with the login path.
pub fn require_session(
    keys: &SessionKeys,
    headers: &HeaderMap,
) -> Result<Session, (StatusCode, String)> {
    let session = session_from_headers(keys, headers);
    match (gate(RouteClass::Protected, session.as_ref()), session) {
        (GateDecision::Allow, Some(session)) => Ok(session),
        _ => Err(as_response(auth_error(format!(
            "Not authenticated; log in at {}",
            LOGIN_PATH
        )))),
    }
}

/// Guard for admin routes: the session, or 401/403 with the redirect
/// target a client should navigate to.
pub fn require_admin(
    keys: &SessionKeys,
    headers: &HeaderMap,
) -> Result<Session, (StatusCode, String)> {
    let session = session_from_headers(keys, headers);
    match (gate(RouteClass::AdminOnly, session.as_ref()), session) {
        (GateDecision::Allow, Some(session)) => Ok(session),
        (GateDecision::RedirectToUserLanding, _) => Err(as_response(forbidden(format!(
            "Administrator access required; return to {}",
            USER_LANDING
        )))),
        _ => Err(as_response(auth_error(format!(
            "Not authenticated; log in at {}",
            LOGIN_PATH
        )))),
    }
}

/// Project a [`RoomlyError`] onto the pair axum handlers return.
pub fn as_response(err: RoomlyError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}
