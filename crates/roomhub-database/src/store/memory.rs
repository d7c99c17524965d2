//! In-memory store gateway using a Tokio mutex for single-node deployments.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_core::types::{
    BookingId, EnrollmentId, HotelId, RoomId, SessionId, TicketId, TicketTypeId, UserId,
};
use roomhub_entity::booking::Booking;
use roomhub_entity::enrollment::Enrollment;
use roomhub_entity::room::Room;
use roomhub_entity::session::Session;
use roomhub_entity::ticket::{Ticket, TicketStatus, TicketType};

use super::gateway::{BookingStore, SessionLookup};

/// Internal state for the memory-based store.
#[derive(Debug, Default)]
struct InnerState {
    rooms: HashMap<RoomId, Room>,
    bookings: BTreeMap<BookingId, Booking>,
    enrollments: BTreeMap<EnrollmentId, Enrollment>,
    tickets: BTreeMap<TicketId, Ticket>,
    ticket_types: HashMap<TicketTypeId, TicketType>,
    sessions: HashMap<String, Session>,
    last_id: i32,
}

impl InnerState {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn occupancy(&self, room_id: RoomId) -> u32 {
        let count = self.bookings.values().filter(|b| b.occupies(room_id)).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn booking_of(&self, user_id: UserId) -> Option<&Booking> {
        self.bookings.values().find(|b| b.is_owned_by(user_id))
    }

    /// Refuse unless `room_id` exists and has a place; a booking already sitting
    /// in the room does not count against it.
    fn ensure_vacancy(&self, room_id: RoomId, moving: Option<&Booking>) -> AppResult<()> {
        let room = self
            .rooms
            .get(&room_id)
            .ok_or_else(|| AppError::room_not_found(format!("Room {room_id} not found")))?;

        let mut occupancy = self.occupancy(room_id);
        if moving.is_some_and(|b| b.occupies(room_id)) {
            occupancy = occupancy.saturating_sub(1);
        }

        if !room.has_vacancy(occupancy) {
            return Err(AppError::room_full(format!(
                "Room {room_id} is at capacity ({})",
                room.capacity
            )));
        }
        Ok(())
    }
}

/// Process-local store gateway.
///
/// Every mutation runs its re-checks and its write under one lock, which
/// makes capacity enforcement atomic on a single node. Fixture methods
/// (`add_*`, `seed_booking`) populate upstream state without admission
/// checks.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookingStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryBookingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room belonging to a (notional) hotel.
    pub async fn add_room(&self, hotel_id: HotelId, name: &str, capacity: i32) -> Room {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let room = Room {
            id: RoomId(state.next_id()),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        state.rooms.insert(room.id, room.clone());
        room
    }

    /// Add the enrollment for a user.
    pub async fn add_enrollment(&self, user_id: UserId, name: &str) -> Enrollment {
        let mut state = self.state.lock().await;
        let enrollment = Enrollment {
            id: EnrollmentId(state.next_id()),
            user_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        state.enrollments.insert(enrollment.id, enrollment.clone());
        enrollment
    }

    pub async fn add_ticket_type(&self, name: &str, is_remote: bool, includes_hotel: bool) -> TicketType {
        let mut state = self.state.lock().await;
        let ticket_type = TicketType {
            id: TicketTypeId(state.next_id()),
            name: name.to_string(),
            price: 60_000,
            is_remote,
            includes_hotel,
            created_at: Utc::now(),
        };
        state.ticket_types.insert(ticket_type.id, ticket_type.clone());
        ticket_type
    }

    pub async fn add_ticket(
        &self,
        enrollment_id: EnrollmentId,
        ticket_type_id: TicketTypeId,
        status: TicketStatus,
    ) -> Ticket {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let ticket = Ticket {
            id: TicketId(state.next_id()),
            ticket_type_id,
            enrollment_id,
            status,
            created_at: now,
            updated_at: now,
        };
        state.tickets.insert(ticket.id, ticket.clone());
        ticket
    }

    /// Register a login session for a token.
    pub async fn add_session(&self, user_id: UserId, token: &str) -> Session {
        let mut state = self.state.lock().await;
        let session = Session {
            id: SessionId(state.next_id()),
            user_id,
            token: token.to_string(),
            created_at: Utc::now(),
        };
        state.sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Insert a booking directly, bypassing the capacity and ownership checks.
    pub async fn seed_booking(&self, user_id: UserId, room_id: RoomId) -> Booking {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let booking = Booking {
            id: BookingId(state.next_id()),
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        };
        state.bookings.insert(booking.id, booking.clone());
        booking
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn find_active_booking_for_user(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state.booking_of(user_id).cloned())
    }

    async fn find_booking_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state.bookings.get(&id).cloned())
    }

    async fn find_room(&self, id: RoomId) -> AppResult<Option<Room>> {
        let state = self.state.lock().await;
        Ok(state.rooms.get(&id).cloned())
    }

    async fn count_bookings_for_room(&self, room_id: RoomId) -> AppResult<u32> {
        let state = self.state.lock().await;
        Ok(state.occupancy(room_id))
    }

    async fn find_enrollment_for_user(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        let state = self.state.lock().await;
        Ok(state
            .enrollments
            .values()
            .find(|e| e.user_id == user_id)
            .cloned())
    }

    async fn find_ticket_for_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        let state = self.state.lock().await;
        Ok(state
            .tickets
            .values()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }

    async fn find_ticket_type(&self, id: TicketTypeId) -> AppResult<Option<TicketType>> {
        let state = self.state.lock().await;
        Ok(state.ticket_types.get(&id).cloned())
    }

    async fn create_booking(&self, user_id: UserId, room_id: RoomId) -> AppResult<Booking> {
        let mut state = self.state.lock().await;

        if let Some(existing) = state.booking_of(user_id) {
            return Err(AppError::already_booked(format!(
                "User {user_id} already holds booking {}",
                existing.id
            )));
        }
        state.ensure_vacancy(room_id, None)?;

        let now = Utc::now();
        let booking = Booking {
            id: BookingId(state.next_id()),
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        };
        state.bookings.insert(booking.id, booking.clone());
        debug!(
            booking_id = %booking.id,
            room_id = %room_id,
            occupancy = state.occupancy(room_id),
            "Booking stored"
        );

        Ok(booking)
    }

    async fn update_booking_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<Booking> {
        let mut state = self.state.lock().await;

        let current = state
            .bookings
            .get(&booking_id)
            .cloned()
            .ok_or_else(|| AppError::booking_not_found(format!("Booking {booking_id} not found")))?;
        state.ensure_vacancy(room_id, Some(&current))?;

        let booking = state
            .bookings
            .get_mut(&booking_id)
            .ok_or_else(|| AppError::booking_not_found(format!("Booking {booking_id} not found")))?;
        booking.room_id = room_id;
        booking.updated_at = Utc::now();

        Ok(booking.clone())
    }
}

#[async_trait]
impl SessionLookup for MemoryBookingStore {
    async fn find_session_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        let state = self.state.lock().await;
        Ok(state.sessions.get(token).cloned())
    }
}
