//! Convenience result type alias for RoomHub.

use crate::error::AppError;

/// A specialized `Result` type for RoomHub operations.
pub type AppResult<T> = Result<T, AppError>;
