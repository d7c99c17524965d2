//! Ticket and ticket type entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::TicketType;
pub use model::Ticket;
pub use status::TicketStatus;
