//! Booking eligibility: the ordered admission checks for creating and
//! moving bookings.

pub mod evaluator;
pub mod rules;

pub use evaluator::{CreateClearance, EligibilityEvaluator, UpdateClearance};
