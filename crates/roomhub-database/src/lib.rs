//! # roomhub-database
//!
//! The store gateway used by the booking core, its PostgreSQL
//! implementation built on per-table repositories, and an in-memory
//! implementation for single-node runs and tests.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{BookingStore, MemoryBookingStore, PgBookingStore, SessionLookup};
