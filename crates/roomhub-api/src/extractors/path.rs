//! Typed path parameter helpers.

use roomhub_core::error::AppError;
use roomhub_core::types::BookingId;

/// Parses a booking id from a path segment.
pub fn parse_booking_id(s: &str) -> Result<BookingId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid booking id: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomhub_core::error::ErrorKind;

    #[test]
    fn test_parse_booking_id() {
        assert_eq!(parse_booking_id("12").unwrap(), BookingId(12));
        for bad in ["abc", "0", "-4", "1.5", ""] {
            assert_eq!(parse_booking_id(bad).unwrap_err().kind, ErrorKind::Validation);
        }
    }
}
