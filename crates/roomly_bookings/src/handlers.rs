// --- File: crates/roomly_bookings/src/handlers.rs ---
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use chrono::{DateTime, Utc};
use roomly_auth::{as_response, require_admin, require_session, Session, SessionKeys};
use roomly_common::{conflict, forbidden, internal_error, not_found, validation_error};
use roomly_config::AppConfig;
use roomly_domain::{
    new_id, transition, Booking, BookingStatus, QuoteRequest, Role, RoomSummary, User, UserSummary,
};
use roomly_store::{
    AdminStats, BookingFilter, BookingRepository, DashboardStats, MemoryStore, RoomRepository,
    StoreError, UserRepository,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

// Define shared state needed by booking handlers
#[derive(Clone)]
pub struct BookingsState {
    pub config: Arc<AppConfig>,
    pub keys: SessionKeys,
    pub store: Arc<MemoryStore>,
}

// --- Data Structures ---

/// Payload for booking creation. Time/purpose/attendee fields are optional
/// so the calculator can name the missing one in its rejection.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub attendees: Option<u32>,
}

/// Payload for owner edits; only the supplied fields change, then the
/// whole booking is re-quoted.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub attendees: Option<u32>,
}

/// Query parameters for the caller's own booking list.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
pub struct MyBookingsQuery {
    pub status: Option<BookingStatus>,
}

/// Query parameters for the admin booking list.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
pub struct AdminBookingsQuery {
    pub status: Option<BookingStatus>,
    pub room_id: Option<String>,
    pub user_id: Option<String>,
}

/// Optional payload for admin rejection; the reason is logged for the
/// audit trail (the stored booking carries status only).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Default)]
pub struct RejectBookingRequest {
    pub reason: Option<String>,
}

/// A booking as rendered to clients: the stored fields plus the nested
/// room summary, and for admin listings the requester's summary too.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub room: Option<RoomSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

// --- Handlers ---

/// Handler to submit a new booking request. The calculator is the
/// authoritative gate: nothing is stored unless it returns a quote.
#[axum::debug_handler]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;

    let room_id = request
        .room_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| as_response(validation_error("required field missing: roomId")))?;
    let room = state
        .store
        .room_by_id(room_id)
        .await
        .map_err(|e| store_failure("look up room", e))?
        .ok_or_else(|| as_response(not_found(format!("Room {} not found", room_id))))?;
    if !room.status.is_bookable() {
        return Err(as_response(conflict(format!(
            "Room {} is not open for booking",
            room.name
        ))));
    }

    let quote = roomly_domain::quote(
        &QuoteRequest {
            start_time: request.start_time,
            end_time: request.end_time,
            purpose: request.purpose.as_deref(),
            attendees: request.attendees,
        },
        room.capacity,
        room.price_per_hour,
    )
    .map_err(|e| as_response(validation_error(e)))?;

    // quote() has already proven these fields are present.
    let booking = Booking {
        id: new_id(),
        room_id: room.id.clone(),
        user_id: session.user_id.clone(),
        start_time: request.start_time.ok_or_else(invalid_quote_state)?,
        end_time: request.end_time.ok_or_else(invalid_quote_state)?,
        purpose: request.purpose.unwrap_or_default().trim().to_string(),
        attendees: request.attendees.ok_or_else(invalid_quote_state)?,
        status: BookingStatus::Pending,
        total_price: quote.total_price,
        created_at: Utc::now(),
    };
    let booking = state
        .store
        .create_booking(booking)
        .await
        .map_err(|e| store_failure("create booking", e))?;

    info!(
        "Booking {} created by {} for room {} ({} h, {})",
        booking.id, session.user_id, room.name, quote.duration_hours, quote.total_price
    );
    Ok(Json(BookingView {
        booking,
        room: Some(RoomSummary::from(&room)),
        user: None,
    }))
}

/// Handler for the owner to edit a PENDING or APPROVED booking. The edit
/// is re-quoted against the room before anything is stored.
#[axum::debug_handler]
pub async fn update_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<UpdateBookingRequest>,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;
    let mut booking = load_booking(&state, &booking_id).await?;

    if booking.user_id != session.user_id {
        return Err(as_response(forbidden("Only the booking owner may edit it")));
    }
    if !booking.status.can_edit() {
        return Err(as_response(conflict(format!(
            "A {:?} booking can no longer be edited",
            booking.status
        ))));
    }

    if let Some(start_time) = request.start_time {
        booking.start_time = start_time;
    }
    if let Some(end_time) = request.end_time {
        booking.end_time = end_time;
    }
    if let Some(purpose) = request.purpose {
        booking.purpose = purpose.trim().to_string();
    }
    if let Some(attendees) = request.attendees {
        booking.attendees = attendees;
    }

    let room = state
        .store
        .room_by_id(&booking.room_id)
        .await
        .map_err(|e| store_failure("look up room", e))?
        .ok_or_else(|| as_response(not_found(format!("Room {} not found", booking.room_id))))?;
    let quote = roomly_domain::quote(
        &QuoteRequest {
            start_time: Some(booking.start_time),
            end_time: Some(booking.end_time),
            purpose: Some(&booking.purpose),
            attendees: Some(booking.attendees),
        },
        room.capacity,
        room.price_per_hour,
    )
    .map_err(|e| as_response(validation_error(e)))?;
    booking.total_price = quote.total_price;

    let booking = state
        .store
        .update_booking(booking)
        .await
        .map_err(|e| store_failure("update booking", e))?;

    info!("Booking {} edited by {}", booking.id, session.user_id);
    Ok(Json(BookingView {
        booking,
        room: Some(RoomSummary::from(&room)),
        user: None,
    }))
}

/// Handler to cancel a booking. The owner or an admin may cancel while it
/// is still PENDING or APPROVED.
#[axum::debug_handler]
pub async fn cancel_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;
    let mut booking = load_booking(&state, &booking_id).await?;
    require_owner_or_admin(&session, &booking)?;

    if !booking.status.can_cancel() {
        return Err(as_response(conflict(format!(
            "A {:?} booking cannot be cancelled",
            booking.status
        ))));
    }
    booking.status = BookingStatus::Cancelled;
    let booking = state
        .store
        .update_booking(booking)
        .await
        .map_err(|e| store_failure("update booking", e))?;

    info!("Booking {} cancelled by {}", booking.id, session.user_id);
    render_booking(&state, booking, false).await
}

/// Handler to delete a dead (CANCELLED or REJECTED) booking outright.
#[axum::debug_handler]
pub async fn delete_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;
    let booking = load_booking(&state, &booking_id).await?;
    require_owner_or_admin(&session, &booking)?;

    if !booking.status.can_delete() {
        return Err(as_response(conflict(format!(
            "A {:?} booking cannot be deleted",
            booking.status
        ))));
    }
    state
        .store
        .delete_booking(&booking_id)
        .await
        .map_err(|e| store_failure("delete booking", e))?;

    info!("Booking {} deleted by {}", booking_id, session.user_id);
    Ok(Json(DeleteResponse {
        success: true,
        message: "Booking deleted".to_string(),
    }))
}

/// Handler listing the caller's own bookings, newest first.
#[axum::debug_handler]
pub async fn my_bookings_handler(
    State(state): State<Arc<BookingsState>>,
    Query(query): Query<MyBookingsQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingView>>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;
    let bookings = state
        .store
        .bookings(BookingFilter {
            status: query.status,
            user_id: Some(session.user_id),
            room_id: None,
        })
        .await
        .map_err(|e| store_failure("list bookings", e))?;
    render_bookings(&state, bookings, false).await
}

/// Handler to fetch one booking. Visible to its owner and to admins.
#[axum::debug_handler]
pub async fn get_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;
    let booking = load_booking(&state, &booking_id).await?;
    require_owner_or_admin(&session, &booking)?;
    render_booking(&state, booking, session.role == Role::Admin).await
}

/// Handler listing every booking for admins, with requester summaries.
#[axum::debug_handler]
pub async fn admin_bookings_handler(
    State(state): State<Arc<BookingsState>>,
    Query(query): Query<AdminBookingsQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingView>>, (StatusCode, String)> {
    require_admin(&state.keys, &headers)?;
    let bookings = state
        .store
        .bookings(BookingFilter {
            status: query.status,
            room_id: query.room_id,
            user_id: query.user_id,
        })
        .await
        .map_err(|e| store_failure("list bookings", e))?;
    render_bookings(&state, bookings, true).await
}

/// Handler for admins to approve a PENDING booking.
#[axum::debug_handler]
pub async fn approve_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    decide_booking(state, booking_id, headers, BookingStatus::Approved, None).await
}

/// Handler for admins to reject a PENDING booking, optionally with a
/// reason.
#[axum::debug_handler]
pub async fn reject_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
    request: Option<Json<RejectBookingRequest>>,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let reason = request.and_then(|Json(r)| r.reason);
    decide_booking(state, booking_id, headers, BookingStatus::Rejected, reason).await
}

/// Handler for the caller's dashboard counters.
#[axum::debug_handler]
pub async fn dashboard_stats_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardStats>, (StatusCode, String)> {
    let session = require_session(&state.keys, &headers)?;
    Ok(Json(state.store.dashboard_stats_for(&session.user_id).await))
}

/// Handler for the system-wide admin counters.
#[axum::debug_handler]
pub async fn admin_stats_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
) -> Result<Json<AdminStats>, (StatusCode, String)> {
    require_admin(&state.keys, &headers)?;
    Ok(Json(state.store.admin_stats_at(Utc::now()).await))
}

/// Handler listing all registered accounts for admins.
#[axum::debug_handler]
pub async fn admin_users_handler(
    State(state): State<Arc<BookingsState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    require_admin(&state.keys, &headers)?;
    let users = state
        .store
        .users()
        .await
        .map_err(|e| store_failure("list users", e))?;
    Ok(Json(users))
}

// --- Helpers ---

async fn decide_booking(
    state: Arc<BookingsState>,
    booking_id: String,
    headers: HeaderMap,
    decision: BookingStatus,
    reason: Option<String>,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let session = require_admin(&state.keys, &headers)?;
    let mut booking = load_booking(&state, &booking_id).await?;

    booking.status = transition(booking.status, decision).map_err(|e| {
        as_response(conflict(format!(
            "Booking {} is {:?} and can no longer be decided",
            booking_id, e.from
        )))
    })?;
    let booking = state
        .store
        .update_booking(booking)
        .await
        .map_err(|e| store_failure("update booking", e))?;

    match reason {
        Some(reason) => info!(
            "Booking {} moved to {:?} by admin {} (reason: {})",
            booking.id, booking.status, session.user_id, reason
        ),
        None => info!(
            "Booking {} moved to {:?} by admin {}",
            booking.id, booking.status, session.user_id
        ),
    }
    render_booking(&state, booking, true).await
}

async fn load_booking(
    state: &BookingsState,
    booking_id: &str,
) -> Result<Booking, (StatusCode, String)> {
    state
        .store
        .booking_by_id(booking_id)
        .await
        .map_err(|e| store_failure("look up booking", e))?
        .ok_or_else(|| as_response(not_found(format!("Booking {} not found", booking_id))))
}

fn require_owner_or_admin(
    session: &Session,
    booking: &Booking,
) -> Result<(), (StatusCode, String)> {
    if booking.user_id == session.user_id || session.role == Role::Admin {
        Ok(())
    } else {
        Err(as_response(forbidden(
            "This booking belongs to another account",
        )))
    }
}

async fn render_booking(
    state: &BookingsState,
    booking: Booking,
    with_user: bool,
) -> Result<Json<BookingView>, (StatusCode, String)> {
    let mut views = render_views(state, vec![booking], with_user).await?;
    // render_views preserves its input length.
    views
        .pop()
        .map(Json)
        .ok_or_else(invalid_quote_state)
}

async fn render_bookings(
    state: &BookingsState,
    bookings: Vec<Booking>,
    with_user: bool,
) -> Result<Json<Vec<BookingView>>, (StatusCode, String)> {
    render_views(state, bookings, with_user).await.map(Json)
}

/// Attach room (and optionally requester) summaries to stored bookings.
/// A room or account deleted after the fact renders as an absent summary
/// rather than failing the listing.
async fn render_views(
    state: &BookingsState,
    bookings: Vec<Booking>,
    with_user: bool,
) -> Result<Vec<BookingView>, (StatusCode, String)> {
    let mut views = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let room = state
            .store
            .room_by_id(&booking.room_id)
            .await
            .map_err(|e| store_failure("look up room", e))?
            .map(|room| RoomSummary::from(&room));
        let user = if with_user {
            state
                .store
                .user_by_id(&booking.user_id)
                .await
                .map_err(|e| store_failure("look up user", e))?
                .map(|user| UserSummary::from(&user))
        } else {
            None
        };
        views.push(BookingView {
            booking,
            room,
            user,
        });
    }
    Ok(views)
}

fn store_failure(context: &'static str, e: StoreError) -> (StatusCode, String) {
    warn!("Failed to {}: {}", context, e);
    as_response(internal_error(format!("Failed to {}", context)))
}

fn invalid_quote_state() -> (StatusCode, String) {
    as_response(internal_error("Booking state desynchronized"))
}
