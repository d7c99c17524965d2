//! Repository implementations for RoomHub tables.

pub mod booking;
pub mod enrollment;
pub mod room;
pub mod session;
pub mod ticket;

pub use booking::BookingRepository;
pub use enrollment::EnrollmentRepository;
pub use room::RoomRepository;
pub use session::SessionRepository;
pub use ticket::TicketRepository;
