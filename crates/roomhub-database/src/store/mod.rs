//! Store gateway consumed by the booking core.
//!
//! Two implementations are provided:
//! - [`PgBookingStore`] over PostgreSQL (row locks inside a transaction)
//! - [`MemoryBookingStore`] over process memory (a single `tokio::sync::Mutex`)

pub mod gateway;
pub mod memory;
pub mod postgres;

pub use gateway::{BookingStore, SessionLookup};
pub use memory::MemoryBookingStore;
pub use postgres::PgBookingStore;
