// File: crates/roomly_auth/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{AuthResponse, LoginRequest, RegisterRequest};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body(content = RegisterRequest, example = json!({
        "email": "user@roomly.test",
        "password": "user123",
        "name": "Demo User",
        "phone": "+6281234567890"
    })),
    responses(
        (status = 200, description = "Account created, session opened", body = AuthResponse),
        (status = 400, description = "Invalid email, name or password"),
        (status = 409, description = "Email already registered")
    )
)]
fn doc_register_handler() {}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(content = LoginRequest, example = json!({
        "email": "user@roomly.test",
        "password": "user123"
    })),
    responses(
        (status = 200, description = "Session opened; redirectTo is chosen by role", body = AuthResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
fn doc_login_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_register_handler, doc_login_handler),
    components(schemas(RegisterRequest, LoginRequest, AuthResponse)),
    tags(
        (name = "auth", description = "Registration and login")
    ),
    servers(
        (url = "/api", description = "Roomly API server")
    )
)]
pub struct AuthApiDoc;
