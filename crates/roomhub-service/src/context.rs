//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roomhub_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the API extractor once the bearer token has been verified and
/// passed into service methods so that every operation knows *who* is
/// acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, ip_address: String, user_agent: Option<String>) -> Self {
        Self {
            user_id,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// Context for internal callers and tests that have no HTTP origin.
    pub fn for_user(user_id: UserId) -> Self {
        Self::new(user_id, "internal".to_string(), None)
    }
}
