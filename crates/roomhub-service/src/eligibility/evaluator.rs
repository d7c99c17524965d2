//! Ordered admission checks over the store gateway.

use std::sync::Arc;

use tracing::debug;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_core::types::{BookingId, RoomId, UserId};
use roomhub_database::BookingStore;
use roomhub_entity::booking::Booking;
use roomhub_entity::room::Room;

use super::rules;

/// Proof that a create request passed every admission check.
#[derive(Debug, Clone)]
pub struct CreateClearance {
    pub room: Room,
    pub occupancy: u32,
}

/// Proof that a move request passed every admission check.
#[derive(Debug, Clone)]
pub struct UpdateClearance {
    pub booking: Booking,
    pub room: Room,
    pub occupancy: u32,
}

/// Runs the admission checks in their fixed order and stops at the first
/// refusal.
///
/// Creation checks, in order: existing booking, enrollment, ticket payment,
/// ticket type, room existence, capacity. Moves check ownership of the
/// booking when it resolves, then room existence, then capacity, and only
/// then whether the booking exists at all.
#[derive(Debug, Clone)]
pub struct EligibilityEvaluator {
    store: Arc<dyn BookingStore>,
}

impl EligibilityEvaluator {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Evaluate whether `user_id` may book `room_id`.
    pub async fn evaluate_create(
        &self,
        user_id: UserId,
        room_id: Option<RoomId>,
    ) -> AppResult<CreateClearance> {
        let existing = self.store.find_active_booking_for_user(user_id).await?;
        rules::ensure_no_booking(user_id, existing.as_ref())?;

        let enrollment = self.store.find_enrollment_for_user(user_id).await?;
        let enrollment = rules::ensure_enrolled(user_id, enrollment)?;

        let ticket = self.store.find_ticket_for_enrollment(enrollment.id).await?;
        let ticket = rules::ensure_ticket_paid(&enrollment, ticket)?;

        let ticket_type = self.store.find_ticket_type(ticket.ticket_type_id).await?;
        rules::ensure_ticket_grants_room(&ticket, ticket_type)?;

        let room = self.resolve_room(room_id).await?;
        let occupancy = self.store.count_bookings_for_room(room.id).await?;
        rules::ensure_vacancy(&room, occupancy, None)?;

        debug!(user_id = %user_id, room_id = %room.id, occupancy, "Booking creation cleared");
        Ok(CreateClearance { room, occupancy })
    }

    /// Evaluate whether `user_id` may move `booking_id` to `room_id`.
    pub async fn evaluate_update(
        &self,
        user_id: UserId,
        booking_id: BookingId,
        room_id: Option<RoomId>,
    ) -> AppResult<UpdateClearance> {
        let booking = self.store.find_booking_by_id(booking_id).await?;
        rules::ensure_owner(user_id, booking.as_ref())?;

        let room = self.resolve_room(room_id).await?;
        let occupancy = self.store.count_bookings_for_room(room.id).await?;
        rules::ensure_vacancy(&room, occupancy, booking.as_ref())?;

        let booking = booking.ok_or_else(|| {
            AppError::booking_not_found(format!("Booking {booking_id} not found"))
        })?;

        debug!(
            user_id = %user_id,
            booking_id = %booking.id,
            room_id = %room.id,
            occupancy,
            "Booking move cleared"
        );
        Ok(UpdateClearance {
            booking,
            room,
            occupancy,
        })
    }

    async fn resolve_room(&self, room_id: Option<RoomId>) -> AppResult<Room> {
        let room = match room_id {
            Some(id) => self.store.find_room(id).await?,
            None => None,
        };
        rules::ensure_room_exists(room_id, room)
    }
}
