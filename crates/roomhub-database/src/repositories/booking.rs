//! Booking repository implementation.
//!
//! `create_within_capacity` and `move_within_capacity` repeat the room and
//! capacity checks inside a transaction that holds row locks, so two
//! requests racing for the last place in a room cannot both commit.
//! Row locks are always taken user/booking first and room last. The
//! `bookings.user_id` unique constraint backs the one-booking rule; a
//! violation surfaces as `AlreadyBooked`.

use sqlx::{PgPool, Postgres, Transaction};

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_core::types::{BookingId, RoomId, UserId};
use roomhub_entity::booking::Booking;

/// Repository for booking records.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by ID.
    pub async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find booking", e))
    }

    /// Find the booking held by a user.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY id LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to find user booking", e))
    }

    /// Count live bookings referencing a room.
    pub async fn count_by_room(&self, room_id: RoomId) -> AppResult<u32> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count room bookings", e))?;
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// Insert a booking if the user holds none and the room has a free place.
    pub async fn create_within_capacity(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> AppResult<Booking> {
        let mut tx = self.begin().await?;

        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to lock user", e))?;

        let held: Option<BookingId> =
            sqlx::query_scalar("SELECT id FROM bookings WHERE user_id = $1 LIMIT 1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| db_error("Failed to check user booking", e))?;
        if let Some(existing) = held {
            return Err(AppError::already_booked(format!(
                "User {user_id} already holds booking {existing}"
            )));
        }

        lock_room_and_check_vacancy(&mut tx, room_id, None).await?;

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, room_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::already_booked(format!("User {user_id} already holds a booking"))
            } else {
                db_error("Failed to create booking", e)
            }
        })?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit booking", e))?;

        Ok(booking)
    }

    /// Point an existing booking at another room if that room has a free place.
    pub async fn move_within_capacity(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<Booking> {
        let mut tx = self.begin().await?;

        let current: Option<Booking> =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
                .bind(booking_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| db_error("Failed to lock booking", e))?;
        let current = current
            .ok_or_else(|| AppError::booking_not_found(format!("Booking {booking_id} not found")))?;

        lock_room_and_check_vacancy(&mut tx, room_id, Some(&current)).await?;

        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET room_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(booking_id)
        .bind(room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to update booking", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit booking update", e))?;

        Ok(booking)
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin booking transaction", e))
    }
}

/// Lock the room row and refuse when it has no free place. A booking that
/// already sits in the room does not count against it.
async fn lock_room_and_check_vacancy(
    tx: &mut Transaction<'static, Postgres>,
    room_id: RoomId,
    moving: Option<&Booking>,
) -> AppResult<()> {
    let capacity: Option<i32> =
        sqlx::query_scalar("SELECT capacity FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(room_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| db_error("Failed to lock room", e))?;
    let capacity =
        capacity.ok_or_else(|| AppError::room_not_found(format!("Room {room_id} not found")))?;

    let mut occupancy: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| db_error("Failed to count room bookings", e))?;
    if moving.is_some_and(|b| b.occupies(room_id)) {
        occupancy -= 1;
    }

    if occupancy >= i64::from(capacity) {
        return Err(AppError::room_full(format!(
            "Room {room_id} is at capacity ({capacity})"
        )));
    }
    Ok(())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

fn db_error(message: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Infrastructure, message.to_string(), err)
}
