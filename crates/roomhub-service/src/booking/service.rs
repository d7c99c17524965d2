//! Booking service: read, create and move a user's room booking.

use std::sync::Arc;

use tracing::{debug, info, warn};

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_core::types::{BookingId, RoomId};
use roomhub_database::BookingStore;
use roomhub_entity::booking::BookingDetails;

use crate::context::RequestContext;
use crate::eligibility::EligibilityEvaluator;

/// Coordinates eligibility evaluation and the store mutations.
///
/// The evaluator runs the ordered checks against a snapshot. The store
/// mutation then repeats the room and capacity checks atomically, so a
/// room that filled up in between is still refused.
#[derive(Debug, Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
    evaluator: EligibilityEvaluator,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        let evaluator = EligibilityEvaluator::new(Arc::clone(&store));
        Self { store, evaluator }
    }

    /// The booking held by the acting user, together with its room.
    pub async fn get_booking(&self, ctx: &RequestContext) -> AppResult<BookingDetails> {
        let booking = self
            .store
            .find_active_booking_for_user(ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::booking_not_found(format!("User {} holds no booking", ctx.user_id))
            })?;

        let room = self.store.find_room(booking.room_id).await?.ok_or_else(|| {
            AppError::internal(format!(
                "Booking {} references missing room {}",
                booking.id, booking.room_id
            ))
        })?;

        debug!(user_id = %ctx.user_id, booking_id = %booking.id, "Booking fetched");
        Ok(BookingDetails {
            id: booking.id,
            room,
        })
    }

    /// Book `room_id` for the acting user.
    ///
    /// `room_id` is `None` when the request carried no usable room id; that
    /// surfaces as `RoomNotFound` once the eligibility checks have passed.
    pub async fn create_booking(
        &self,
        ctx: &RequestContext,
        room_id: Option<RoomId>,
    ) -> AppResult<BookingId> {
        let clearance = self
            .evaluator
            .evaluate_create(ctx.user_id, room_id)
            .await
            .inspect_err(|e| log_refusal("create", ctx, e))?;

        let booking = self
            .store
            .create_booking(ctx.user_id, clearance.room.id)
            .await
            .inspect_err(|e| log_refusal("create", ctx, e))?;

        info!(
            user_id = %ctx.user_id,
            booking_id = %booking.id,
            room_id = %booking.room_id,
            "Booking created"
        );
        Ok(booking.id)
    }

    /// Move the acting user's booking `booking_id` to `room_id`.
    pub async fn update_booking(
        &self,
        ctx: &RequestContext,
        booking_id: BookingId,
        room_id: Option<RoomId>,
    ) -> AppResult<BookingId> {
        let clearance = self
            .evaluator
            .evaluate_update(ctx.user_id, booking_id, room_id)
            .await
            .inspect_err(|e| log_refusal("update", ctx, e))?;

        let booking = self
            .store
            .update_booking_room(clearance.booking.id, clearance.room.id)
            .await
            .inspect_err(|e| log_refusal("update", ctx, e))?;

        info!(
            user_id = %ctx.user_id,
            booking_id = %booking.id,
            from_room = %clearance.booking.room_id,
            to_room = %booking.room_id,
            "Booking moved"
        );
        Ok(booking.id)
    }
}

fn log_refusal(operation: &str, ctx: &RequestContext, err: &AppError) {
    if err.kind.is_denial() {
        debug!(operation, user_id = %ctx.user_id, kind = %err.kind, "Booking refused: {}", err.message);
    } else if matches!(err.kind, ErrorKind::Infrastructure | ErrorKind::Internal) {
        warn!(operation, user_id = %ctx.user_id, kind = %err.kind, "Booking failed: {}", err.message);
    }
}
