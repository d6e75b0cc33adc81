// --- File: crates/roomly_auth/src/token.rs ---
//! Stateless session tokens.
//!
//! Sessions are HS256 JWTs carrying the user id, role and display name.
//! There is no server-side session table: a token that fails to decode,
//! is expired, or is absent simply means "not authenticated" — no
//! partial-trust state.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use roomly_config::AuthConfig;
use roomly_domain::{Role, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to encode token: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid or expired token")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // user id
    name: String,
    role: Role,
    exp: usize, // expiration timestamp (Unix epoch seconds)
    iat: usize,
}

/// An authenticated caller, as decoded from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub role: Role,
}

/// Signing key material plus token lifetime, shared by every route state.
#[derive(Clone)]
pub struct SessionKeys {
    secret: String,
    ttl_seconds: i64,
}

impl SessionKeys {
    pub fn from_config(auth: &AuthConfig) -> Self {
        Self {
            secret: auth.token_secret.clone(),
            ttl_seconds: auth.token_ttl_seconds,
        }
    }

    /// Issue a session token for a freshly authenticated user.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Encode)
    }

    /// Decode and validate a session token.
    pub fn verify(&self, token: &str) -> Result<Session, TokenError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| TokenError::Invalid)?;
        Ok(Session {
            user_id: data.claims.sub,
            name: data.claims.name,
            role: data.claims.role,
        })
    }
}
