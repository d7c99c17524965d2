//! Booking domain entities.

pub mod model;

pub use model::{Booking, BookingDetails};
