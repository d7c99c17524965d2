//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roomhub_core::types::{SessionId, UserId};

/// A server-side login session; a bearer token is honoured only while
/// its session row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    #[serde(skip_serializing)]
    pub token: String,
    pub created_at: DateTime<Utc>,
}
