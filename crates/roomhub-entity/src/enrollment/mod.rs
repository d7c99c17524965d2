//! Enrollment entities.

pub mod model;

pub use model::Enrollment;
