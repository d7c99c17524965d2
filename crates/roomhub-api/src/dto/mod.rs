//! Request and response payloads.

pub mod request;
pub mod response;

pub use request::BookingRoomRequest;
pub use response::{ApiResponse, BookingIdResponse, HealthResponse};
