//! Core type definitions used across the RoomHub workspace.

pub mod id;

pub use id::*;
