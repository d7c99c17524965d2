//! Enrollment repository implementation.

use sqlx::PgPool;

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_core::types::UserId;
use roomhub_entity::enrollment::Enrollment;

/// Read-only access to enrollments written by the admissions flow.
#[derive(Debug, Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the enrollment belonging to a user.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE user_id = $1 LIMIT 1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Infrastructure, "Failed to find enrollment", e)
            })
    }
}
