//! # roomhub-entity
//!
//! Domain entity models for RoomHub. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow`.
//!
//! Only [`booking`] is written by this system; rooms, enrollments and
//! tickets are upstream state read during admission.

pub mod booking;
pub mod enrollment;
pub mod room;
pub mod session;
pub mod ticket;
