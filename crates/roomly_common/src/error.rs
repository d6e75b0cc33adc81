// --- File: crates/roomly_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Roomly errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for RoomlyError.
#[derive(Error, Debug)]
pub enum RoomlyError {
    /// Input failed a local validation rule before any store access
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during authentication
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// The caller is authenticated but not allowed to do this
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to a conflict (e.g., lifecycle violation, duplicate email)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during a store operation
    #[error("Store error: {0}")]
    StoreError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RoomlyError {
    fn status_code(&self) -> u16 {
        match self {
            RoomlyError::ValidationError(_) => 400,
            RoomlyError::AuthError(_) => 401,
            RoomlyError::ForbiddenError(_) => 403,
            RoomlyError::NotFoundError(_) => 404,
            RoomlyError::ConflictError(_) => 409,
            RoomlyError::ConfigError(_) => 500,
            RoomlyError::StoreError(_) => 500,
            RoomlyError::InternalError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> RoomlyError {
    RoomlyError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> RoomlyError {
    RoomlyError::AuthError(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> RoomlyError {
    RoomlyError::ForbiddenError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> RoomlyError {
    RoomlyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> RoomlyError {
    RoomlyError::ConflictError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> RoomlyError {
    RoomlyError::InternalError(message.to_string())
}

impl From<serde_json::Error> for RoomlyError {
    fn from(err: serde_json::Error) -> Self {
        RoomlyError::InternalError(err.to_string())
    }
}
