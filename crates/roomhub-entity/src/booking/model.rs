//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roomhub_core::types::{BookingId, RoomId, UserId};

use crate::room::Room;

/// A user's claim on one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// The user holding the booking.
    pub user_id: UserId,
    /// The room being occupied.
    pub room_id: RoomId,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking last changed rooms.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Check whether the given user owns this booking.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Check whether this booking already occupies the given room.
    pub fn occupies(&self, room_id: RoomId) -> bool {
        self.room_id == room_id
    }
}

/// The read-path view of a booking: its id and the room it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    /// Booking identifier.
    pub id: BookingId,
    /// The booked room.
    #[serde(rename = "Room")]
    pub room: Room,
}
