//! Request DTOs.

use serde::{Deserialize, Serialize};

use roomhub_core::types::RoomId;

/// Body of `POST /booking` and `PUT /booking/{bookingId}`.
///
/// `roomId` is kept loose so that a missing, zero, negative or
/// non-numeric value reaches the service as "no room" instead of being
/// rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoomRequest {
    #[serde(default)]
    pub room_id: Option<serde_json::Value>,
}

impl BookingRoomRequest {
    /// The requested room, if the body names a positive integer id.
    pub fn room_id(&self) -> Option<RoomId> {
        match self.room_id.as_ref()? {
            serde_json::Value::Number(n) => n.as_i64().and_then(RoomId::from_positive),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<RoomId> {
        serde_json::from_str::<BookingRoomRequest>(body)
            .unwrap()
            .room_id()
    }

    #[test]
    fn test_room_id_forms() {
        assert_eq!(parse(r#"{"roomId": 3}"#), Some(RoomId(3)));
        assert_eq!(parse(r#"{"roomId": "7"}"#), Some(RoomId(7)));
        assert_eq!(parse(r#"{"roomId": 0}"#), None);
        assert_eq!(parse(r#"{"roomId": -2}"#), None);
        assert_eq!(parse(r#"{"roomId": 2.5}"#), None);
        assert_eq!(parse(r#"{"roomId": "abc"}"#), None);
        assert_eq!(parse(r#"{"roomId": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }
}
