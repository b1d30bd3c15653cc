//! Booking handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::BookingRequest;
use crate::dto::response::{BookingIdResponse, CurrentBookingResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody, parse_booking_id};
use crate::state::AppState;

/// GET /booking
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CurrentBookingResponse>, ApiError> {
    let current = state.booking_service.get_current_booking(&auth).await?;
    Ok(Json(current.into()))
}

/// POST /booking
pub async fn post_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<BookingRequest>,
) -> Result<Json<BookingIdResponse>, ApiError> {
    let id = state
        .booking_service
        .create_booking(&auth, req.room_id)
        .await?;
    Ok(Json(BookingIdResponse { id }))
}

/// PUT /booking/{bookingId}
pub async fn put_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<String>,
    JsonBody(req): JsonBody<BookingRequest>,
) -> Result<Json<BookingIdResponse>, ApiError> {
    let booking_id = parse_booking_id(&booking_id)?;
    let id = state
        .booking_service
        .reassign_booking(&auth, req.room_id, booking_id)
        .await?;
    Ok(Json(BookingIdResponse { id }))
}
