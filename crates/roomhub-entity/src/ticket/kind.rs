//! Ticket type entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roomhub_core::types::TicketTypeId;

/// Category of ticket controlling hotel inclusion and remote attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Price in cents.
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
}

impl TicketType {
    /// Only in-person tickets that bundle a hotel stay grant a room.
    pub fn grants_hotel_room(&self) -> bool {
        self.includes_hotel && !self.is_remote
    }
}
