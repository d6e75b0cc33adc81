// File: crates/roomly_bookings/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{
    BookingView, CreateBookingRequest, DeleteResponse, RejectBookingRequest, UpdateBookingRequest,
};
use roomly_domain::User;
use roomly_store::{AdminStats, DashboardStats};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/bookings",
    request_body(content = CreateBookingRequest, example = json!({
        "roomId": "room-1",
        "startTime": "2025-06-01T09:00:00Z",
        "endTime": "2025-06-01T11:00:00Z",
        "purpose": "Team standup",
        "attendees": 5
    })),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking submitted as PENDING", body = BookingView),
        (status = 400, description = "Missing field, invalid times or attendees over capacity"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room is not open for booking")
    )
)]
fn doc_create_booking_handler() {}

#[utoipa::path(
    get,
    path = "/bookings/my",
    params(("status" = Option<String>, Query, description = "Lifecycle status filter")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's bookings, newest first", body = Vec<BookingView>),
        (status = 401, description = "Not authenticated")
    )
)]
fn doc_my_bookings_handler() {}

#[utoipa::path(
    get,
    path = "/bookings/{id}",
    params(("id" = String, Path, description = "Booking ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The booking", body = BookingView),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Belongs to another account"),
        (status = 404, description = "Booking not found")
    )
)]
fn doc_get_booking_handler() {}

#[utoipa::path(
    patch,
    path = "/bookings/{id}",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking updated and re-priced", body = BookingView),
        (status = 400, description = "Re-quote rejected the edited fields"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Only the owner may edit"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Status no longer allows edits")
    )
)]
fn doc_update_booking_handler() {}

#[utoipa::path(
    post,
    path = "/bookings/{id}/cancel",
    params(("id" = String, Path, description = "Booking ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingView),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Belongs to another account"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Status no longer allows cancellation")
    )
)]
fn doc_cancel_booking_handler() {}

#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    params(("id" = String, Path, description = "Booking ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking removed", body = DeleteResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Belongs to another account"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Only CANCELLED or REJECTED bookings may be deleted")
    )
)]
fn doc_delete_booking_handler() {}

#[utoipa::path(
    get,
    path = "/admin/bookings",
    params(
        ("status" = Option<String>, Query, description = "Lifecycle status filter"),
        ("room_id" = Option<String>, Query, description = "Room filter"),
        ("user_id" = Option<String>, Query, description = "Requester filter")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings with requester summaries", body = Vec<BookingView>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required")
    )
)]
fn doc_admin_bookings_handler() {}

#[utoipa::path(
    post,
    path = "/admin/bookings/{id}/approve",
    params(("id" = String, Path, description = "Booking ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking approved", body = BookingView),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is no longer PENDING")
    )
)]
fn doc_approve_booking_handler() {}

#[utoipa::path(
    post,
    path = "/admin/bookings/{id}/reject",
    params(("id" = String, Path, description = "Booking ID")),
    request_body(content = RejectBookingRequest, description = "Optional rejection reason"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking rejected", body = BookingView),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking is no longer PENDING")
    )
)]
fn doc_reject_booking_handler() {}

#[utoipa::path(
    get,
    path = "/stats/dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's booking counters", body = DashboardStats),
        (status = 401, description = "Not authenticated")
    )
)]
fn doc_dashboard_stats_handler() {}

#[utoipa::path(
    get,
    path = "/admin/stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "System-wide counters", body = AdminStats),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required")
    )
)]
fn doc_admin_stats_handler() {}

#[utoipa::path(
    get,
    path = "/admin/users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All registered accounts", body = Vec<User>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Administrator access required")
    )
)]
fn doc_admin_users_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_booking_handler,
        doc_my_bookings_handler,
        doc_get_booking_handler,
        doc_update_booking_handler,
        doc_cancel_booking_handler,
        doc_delete_booking_handler,
        doc_admin_bookings_handler,
        doc_approve_booking_handler,
        doc_reject_booking_handler,
        doc_dashboard_stats_handler,
        doc_admin_stats_handler,
        doc_admin_users_handler
    ),
    components(schemas(
        CreateBookingRequest,
        UpdateBookingRequest,
        RejectBookingRequest,
        BookingView,
        DeleteResponse,
        DashboardStats,
        AdminStats
    )),
    tags(
        (name = "bookings", description = "Booking lifecycle and approvals"),
        (name = "stats", description = "User and admin dashboards")
    ),
    servers(
        (url = "/api", description = "Roomly API server")
    )
)]
pub struct BookingsApiDoc;
