//! Unified application error types for RoomHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The booking kinds form a closed set;
//! only the HTTP boundary decides how each one is presented.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The user holds no booking, or the referenced booking does not exist.
    BookingNotFound,
    /// The target room does not exist.
    RoomNotFound,
    /// The user already holds a booking.
    AlreadyBooked,
    /// Enrollment or ticket state does not allow a hotel booking.
    NotEligible,
    /// The target room has no remaining capacity.
    RoomFull,
    /// The booking belongs to another user.
    NotPermitted,
    /// A store-layer failure (connection error, constraint violation).
    Infrastructure,
    /// Malformed input.
    Validation,
    /// Missing or invalid credentials.
    Unauthorized,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind is a business-rule refusal rather than a fault.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            Self::AlreadyBooked | Self::NotEligible | Self::RoomFull | Self::NotPermitted
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BookingNotFound => write!(f, "BOOKING_NOT_FOUND"),
            Self::RoomNotFound => write!(f, "ROOM_NOT_FOUND"),
            Self::AlreadyBooked => write!(f, "ALREADY_BOOKED"),
            Self::NotEligible => write!(f, "NOT_ELIGIBLE"),
            Self::RoomFull => write!(f, "ROOM_FULL"),
            Self::NotPermitted => write!(f, "NOT_PERMITTED"),
            Self::Infrastructure => write!(f, "INFRASTRUCTURE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout RoomHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn booking_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BookingNotFound, message)
    }

    pub fn room_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoomNotFound, message)
    }

    pub fn already_booked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyBooked, message)
    }

    pub fn not_eligible(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotEligible, message)
    }

    pub fn room_full(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoomFull, message)
    }

    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotPermitted, message)
    }

    /// Create an infrastructure (store-layer) error.
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Infrastructure, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Validation,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(
            ErrorKind::Infrastructure,
            format!("Database error: {err}"),
            err,
        )
    }
}
