//! Newtype wrappers around `i32` for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `RoomId` where a
//! `BookingId` is expected. When the `sqlx` feature is enabled, each ID
//! type also implements `sqlx::Type`, `sqlx::Encode`, and `sqlx::Decode`
//! for PostgreSQL `INTEGER` columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a valid positive identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: '{0}'")]
pub struct InvalidId(pub String);

/// Macro to define a newtype ID wrapper around a serial `i32` key.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Accept only strictly positive keys (serial columns start at 1).
            pub fn from_positive(value: i64) -> Option<Self> {
                i32::try_from(value).ok().filter(|v| *v > 0).map(Self)
            }

            /// Return the inner integer value.
            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(Self::from_positive)
                    .ok_or_else(|| InvalidId(s.to_string()))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }

        #[cfg(feature = "sqlx")]
        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i32 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i32 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of an authenticated user.
    UserId
);

define_id!(
    /// Identifier of a booking.
    BookingId
);

define_id!(
    /// Identifier of a hotel room.
    RoomId
);

define_id!(
    /// Identifier of a hotel.
    HotelId
);

define_id!(
    /// Identifier of an enrollment.
    EnrollmentId
);

define_id!(
    /// Identifier of a ticket.
    TicketId
);

define_id!(
    /// Identifier of a ticket type.
    TicketTypeId
);

define_id!(
    /// Identifier of a login session.
    SessionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_positive() {
        let id: RoomId = "42".parse().expect("should parse");
        assert_eq!(id, RoomId(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_from_str_rejects_zero_negative_and_garbage() {
        assert!("0".parse::<RoomId>().is_err());
        assert!("-3".parse::<RoomId>().is_err());
        assert!("abc".parse::<BookingId>().is_err());
        assert!("".parse::<BookingId>().is_err());
        assert!("99999999999".parse::<BookingId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&BookingId(7)).expect("serialize");
        assert_eq!(json, "7");
        let parsed: UserId = serde_json::from_str("12").expect("deserialize");
        assert_eq!(parsed, UserId(12));
    }
}
