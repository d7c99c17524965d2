//! Ticket and ticket type repository implementation.

use sqlx::PgPool;

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_core::types::{EnrollmentId, TicketTypeId};
use roomhub_entity::ticket::{Ticket, TicketType};

/// Read-only access to purchased tickets and their types.
#[derive(Debug, Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Create a new ticket repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the ticket attached to an enrollment.
    pub async fn find_by_enrollment(&self, enrollment_id: EnrollmentId) -> AppResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE enrollment_id = $1 ORDER BY id LIMIT 1",
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Infrastructure, "Failed to find ticket", e))
    }

    /// Find a ticket type by ID.
    pub async fn find_type(&self, id: TicketTypeId) -> AppResult<Option<TicketType>> {
        sqlx::query_as::<_, TicketType>("SELECT * FROM ticket_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Infrastructure, "Failed to find ticket type", e)
            })
    }
}
