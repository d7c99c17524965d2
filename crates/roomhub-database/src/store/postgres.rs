//! PostgreSQL-backed store gateway.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use roomhub_core::result::AppResult;
use roomhub_core::types::{BookingId, EnrollmentId, RoomId, TicketTypeId, UserId};
use roomhub_entity::booking::Booking;
use roomhub_entity::enrollment::Enrollment;
use roomhub_entity::room::Room;
use roomhub_entity::session::Session;
use roomhub_entity::ticket::{Ticket, TicketType};

use super::gateway::{BookingStore, SessionLookup};
use crate::repositories::{
    BookingRepository, EnrollmentRepository, RoomRepository, SessionRepository, TicketRepository,
};

/// Store gateway composed from the per-table repositories.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    bookings: Arc<BookingRepository>,
    rooms: Arc<RoomRepository>,
    enrollments: Arc<EnrollmentRepository>,
    tickets: Arc<TicketRepository>,
    sessions: Arc<SessionRepository>,
}

impl PgBookingStore {
    /// Creates a store whose repositories share one pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: Arc::new(BookingRepository::new(pool.clone())),
            rooms: Arc::new(RoomRepository::new(pool.clone())),
            enrollments: Arc::new(EnrollmentRepository::new(pool.clone())),
            tickets: Arc::new(TicketRepository::new(pool.clone())),
            sessions: Arc::new(SessionRepository::new(pool)),
        }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn find_active_booking_for_user(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        self.bookings.find_by_user(user_id).await
    }

    async fn find_booking_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        self.bookings.find_by_id(id).await
    }

    async fn find_room(&self, id: RoomId) -> AppResult<Option<Room>> {
        self.rooms.find_by_id(id).await
    }

    async fn count_bookings_for_room(&self, room_id: RoomId) -> AppResult<u32> {
        self.bookings.count_by_room(room_id).await
    }

    async fn find_enrollment_for_user(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        self.enrollments.find_by_user(user_id).await
    }

    async fn find_ticket_for_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        self.tickets.find_by_enrollment(enrollment_id).await
    }

    async fn find_ticket_type(&self, id: TicketTypeId) -> AppResult<Option<TicketType>> {
        self.tickets.find_type(id).await
    }

    async fn create_booking(&self, user_id: UserId, room_id: RoomId) -> AppResult<Booking> {
        self.bookings.create_within_capacity(user_id, room_id).await
    }

    async fn update_booking_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<Booking> {
        self.bookings.move_within_capacity(booking_id, room_id).await
    }
}

#[async_trait]
impl SessionLookup for PgBookingStore {
    async fn find_session_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        self.sessions.find_by_token(token).await
    }
}
