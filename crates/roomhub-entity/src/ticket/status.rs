//! Ticket payment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    /// Reserved but awaiting payment.
    Reserved,
    /// Payment confirmed.
    Paid,
}

impl TicketStatus {
    /// Whether the ticket is still awaiting payment.
    pub fn is_awaiting_payment(&self) -> bool {
        matches!(self, Self::Reserved)
    }

    /// Return the status as the uppercase database label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = roomhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            _ => Err(roomhub_core::AppError::validation(format!(
                "Invalid ticket status: '{s}'. Expected one of: RESERVED, PAID"
            ))),
        }
    }
}
