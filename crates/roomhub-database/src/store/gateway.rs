//! Store gateway traits.

use async_trait::async_trait;

use roomhub_core::result::AppResult;
use roomhub_core::types::{BookingId, EnrollmentId, RoomId, TicketTypeId, UserId};
use roomhub_entity::booking::Booking;
use roomhub_entity::enrollment::Enrollment;
use roomhub_entity::room::Room;
use roomhub_entity::session::Session;
use roomhub_entity::ticket::{Ticket, TicketType};

/// Persistence operations required by booking admission.
///
/// Lookups return `Ok(None)` when the record is absent; `Err` is reserved
/// for store failures. The two mutations are atomic with respect to other
/// mutations touching the same room: each re-checks room existence and
/// capacity (and, for creation, the user's existing booking) and refuses
/// with `RoomNotFound`, `RoomFull`, `AlreadyBooked` or `BookingNotFound`
/// instead of overshooting.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug {
    /// The booking currently held by a user, if any.
    async fn find_active_booking_for_user(&self, user_id: UserId) -> AppResult<Option<Booking>>;

    async fn find_booking_by_id(&self, id: BookingId) -> AppResult<Option<Booking>>;

    async fn find_room(&self, id: RoomId) -> AppResult<Option<Room>>;

    /// Live count of bookings referencing a room.
    async fn count_bookings_for_room(&self, room_id: RoomId) -> AppResult<u32>;

    async fn find_enrollment_for_user(&self, user_id: UserId) -> AppResult<Option<Enrollment>>;

    async fn find_ticket_for_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>>;

    async fn find_ticket_type(&self, id: TicketTypeId) -> AppResult<Option<TicketType>>;

    /// Insert a booking for `user_id` in `room_id`.
    async fn create_booking(&self, user_id: UserId, room_id: RoomId) -> AppResult<Booking>;

    /// Move `booking_id` to `room_id`.
    async fn update_booking_room(&self, booking_id: BookingId, room_id: RoomId)
    -> AppResult<Booking>;
}

/// Session lookups used by bearer-token verification.
#[async_trait]
pub trait SessionLookup: Send + Sync + std::fmt::Debug {
    /// Find the session a token was issued for.
    async fn find_session_by_token(&self, token: &str) -> AppResult<Option<Session>>;
}
