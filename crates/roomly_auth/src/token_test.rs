#[cfg(test)]
mod tests {
    use crate::token::SessionKeys;
    use chrono::Utc;
    use roomly_config::AuthConfig;
    use roomly_domain::{new_id, Role, User};

    fn keys_with(secret: &str, ttl: i64) -> SessionKeys {
        SessionKeys::from_config(&AuthConfig {
            token_secret: secret.to_string(),
            token_ttl_seconds: ttl,
        })
    }

    fn user(role: Role) -> User {
        User {
            id: new_id(),
            name: "Token Test".to_string(),
            email: "token@example.com".to_string(),
            phone: None,
            role,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let keys = keys_with("secret-a", 3600);
        let user = user(Role::Admin);
        let token = keys.issue(&user).unwrap();
        let session = keys.verify(&token).unwrap();
        assert_eq!(session.user_id, user.id);
        assert_eq!(session.name, user.name);
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn test_wrong_secret_rejects() {
        let token = keys_with("secret-a", 3600).issue(&user(Role::User)).unwrap();
        assert!(keys_with("secret-b", 3600).verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejects() {
        // jsonwebtoken applies default leeway, so back-date well past it.
        let token = keys_with("secret-a", -600).issue(&user(Role::User)).unwrap();
        assert!(keys_with("secret-a", 3600).verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejects() {
        let keys = keys_with("secret-a", 3600);
        let mut token = keys.issue(&user(Role::User)).unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_err());
    }
}
