//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roomhub_core::types::{HotelId, RoomId};

/// A bookable hotel room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Display name (e.g. the door number).
    pub name: String,
    /// Maximum simultaneous bookings.
    pub capacity: i32,
    /// Hotel the room belongs to.
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Capacity as an unsigned count; negative values are treated as zero.
    pub fn capacity(&self) -> u32 {
        u32::try_from(self.capacity).unwrap_or(0)
    }

    /// Whether a room with `occupancy` live bookings can take one more.
    pub fn has_vacancy(&self, occupancy: u32) -> bool {
        occupancy < self.capacity()
    }
}
