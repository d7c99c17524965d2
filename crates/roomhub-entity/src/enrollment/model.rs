//! Enrollment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roomhub_core::types::{EnrollmentId, UserId};

/// A user's event registration, created by the admissions flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    /// At most one enrollment exists per user.
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
