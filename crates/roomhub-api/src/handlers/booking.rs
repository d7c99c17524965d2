//! Booking handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use roomhub_core::error::AppError;
use roomhub_entity::booking::BookingDetails;

use crate::dto::request::BookingRoomRequest;
use crate::error::ApiResult;
use crate::dto::response::BookingIdResponse;
use crate::extractors::{AuthUser, parse_booking_id};
use crate::state::AppState;

/// GET /booking
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<BookingDetails>> {
    let booking = state.booking_service.get_booking(&auth).await?;
    Ok(Json(booking))
}

/// POST /booking
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<BookingRoomRequest>, JsonRejection>,
) -> ApiResult<Json<BookingIdResponse>> {
    let Json(req) = body.map_err(reject_body)?;
    let booking_id = state
        .booking_service
        .create_booking(&auth, req.room_id())
        .await?;
    Ok(Json(BookingIdResponse { booking_id }))
}

/// PUT /booking/{booking_id}, also mounted for PATCH
pub async fn update_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<String>,
    body: Result<Json<BookingRoomRequest>, JsonRejection>,
) -> ApiResult<Json<BookingIdResponse>> {
    let booking_id = parse_booking_id(&booking_id)?;
    let Json(req) = body.map_err(reject_body)?;
    let booking_id = state
        .booking_service
        .update_booking(&auth, booking_id, req.room_id())
        .await?;
    Ok(Json(BookingIdResponse { booking_id }))
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::validation(format!("Invalid request body: {}", rejection.body_text()))
}
