//! # roomhub-service
//!
//! Booking admission for RoomHub. [`EligibilityEvaluator`] decides whether
//! a create or move is permitted; [`BookingService`] resolves the records
//! it needs through the injected store gateway and commits the mutation.
//!
//! Services follow constructor injection: the store gateway is provided
//! at construction time as an `Arc<dyn BookingStore>`.

pub mod booking;
pub mod context;
pub mod eligibility;

pub use booking::BookingService;
pub use context::RequestContext;
pub use eligibility::{CreateClearance, EligibilityEvaluator, UpdateClearance};
