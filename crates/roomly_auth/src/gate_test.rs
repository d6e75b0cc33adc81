#[cfg(test)]
mod tests {
    use crate::gate::{
        gate, landing_for, require_admin, require_session, GateDecision, RouteClass,
        ADMIN_LANDING, LOGIN_PATH, USER_LANDING,
    };
    use crate::token::{Session, SessionKeys};
    use axum::http::{header, HeaderMap, StatusCode};
    use roomly_config::AuthConfig;
    use roomly_domain::Role;

    fn session(role: Role) -> Session {
        Session {
            user_id: "u1".to_string(),
            name: "Somebody".to_string(),
            role,
        }
    }

    fn keys() -> SessionKeys {
        SessionKeys::from_config(&AuthConfig {
            token_secret: "gate-test-secret".to_string(),
            token_ttl_seconds: 3600,
        })
    }

    #[test]
    fn test_public_routes_always_allow() {
        assert_eq!(gate(RouteClass::Public, None), GateDecision::Allow);
        assert_eq!(
            gate(RouteClass::Public, Some(&session(Role::User))),
            GateDecision::Allow
        );
    }

    #[test]
    fn test_unauthenticated_is_sent_to_login() {
        // Scenario: no session on a protected or admin route
        assert_eq!(
            gate(RouteClass::Protected, None),
            GateDecision::RedirectToLogin
        );
        assert_eq!(
            gate(RouteClass::AdminOnly, None),
            GateDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_regular_user_is_bounced_from_admin_routes() {
        // Scenario: authenticated USER on an admin-only route
        assert_eq!(
            gate(RouteClass::AdminOnly, Some(&session(Role::User))),
            GateDecision::RedirectToUserLanding
        );
        assert_eq!(
            gate(RouteClass::Protected, Some(&session(Role::User))),
            GateDecision::Allow
        );
    }

    #[test]
    fn test_admin_reaches_admin_routes() {
        assert_eq!(
            gate(RouteClass::AdminOnly, Some(&session(Role::Admin))),
            GateDecision::Allow
        );
    }

    #[test]
    fn test_landing_is_chosen_by_role() {
        // Scenario: login redirect target per role
        assert_eq!(landing_for(Role::Admin), ADMIN_LANDING);
        assert_eq!(landing_for(Role::User), USER_LANDING);
    }

    #[test]
    fn test_require_session_maps_to_401_with_login_path() {
        let err = require_session(&keys(), &HeaderMap::new()).unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
        assert!(err.1.contains(LOGIN_PATH));
    }

    #[test]
    fn test_garbage_token_is_not_a_session() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer not-a-jwt".parse().unwrap());
        assert!(require_session(&keys(), &headers).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert!(require_session(&keys(), &headers).is_err());
    }

    #[test]
    fn test_require_admin_distinguishes_401_from_403() {
        let keys = keys();

        let err = require_admin(&keys, &HeaderMap::new()).unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);

        let user = roomly_domain::User {
            id: "u1".to_string(),
            name: "Somebody".to_string(),
            email: "s@example.com".to_string(),
            phone: None,
            role: Role::User,
            avatar: None,
            created_at: chrono::Utc::now(),
        };
        let token = keys.issue(&user).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        let err = require_admin(&keys, &headers).unwrap_err();
        assert_eq!(err.0, StatusCode::FORBIDDEN);
        assert!(err.1.contains(USER_LANDING));
    }
}
