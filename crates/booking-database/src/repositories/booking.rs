//! Booking repository implementation.
//!
//! Room occupancy is guarded by the unique index on `bookings.room_id`:
//! inserts use `ON CONFLICT DO NOTHING`, updates translate a unique
//! violation into "no row written".

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use booking_core::error::{AppError, ErrorKind};
use booking_core::result::AppResult;
use booking_core::types::{BookingId, HotelId, RoomId, UserId};
use booking_entity::booking::{Booking, BookingWithRoom};
use booking_entity::enrollment::Enrollment;
use booking_entity::room::Room;
use booking_entity::user::{User, UserWithBookings, UserWithEnrollments};

use crate::store::BookingStore;

const BOOKING_COLUMNS: &str = "id, user_id, room_id, created_at, updated_at";

/// Repository for users, enrollments, rooms, and bookings.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

/// A booking row joined to its room, columns prefixed to avoid clashes.
#[derive(Debug, FromRow)]
struct BookingRoomRow {
    id: BookingId,
    user_id: UserId,
    room_id: RoomId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    room_name: String,
    room_capacity: i32,
    room_hotel_id: HotelId,
    room_created_at: DateTime<Utc>,
    room_updated_at: DateTime<Utc>,
}

impl From<BookingRoomRow> for BookingWithRoom {
    fn from(row: BookingRoomRow) -> Self {
        Self {
            booking: Booking {
                id: row.id,
                user_id: row.user_id,
                room_id: row.room_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            room: Room {
                id: row.room_id,
                name: row.room_name,
                capacity: row.room_capacity,
                hotel_id: row.room_hotel_id,
                created_at: row.room_created_at,
                updated_at: row.room_updated_at,
            },
        }
    }
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn find_user_with_booking_and_room(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<UserWithBookings>> {
        let Some(user) = self.find_user(user_id).await? else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, BookingRoomRow>(
            "SELECT b.id, b.user_id, b.room_id, b.created_at, b.updated_at, \
                    r.name AS room_name, r.capacity AS room_capacity, \
                    r.hotel_id AS room_hotel_id, r.created_at AS room_created_at, \
                    r.updated_at AS room_updated_at \
             FROM bookings b \
             JOIN rooms r ON r.id = b.room_id \
             WHERE b.user_id = $1 \
             ORDER BY b.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load user bookings", e)
        })?;

        Ok(Some(UserWithBookings {
            user,
            bookings: rows.into_iter().map(BookingWithRoom::from).collect(),
        }))
    }

    async fn find_user_with_enrollment(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<UserWithEnrollments>> {
        let Some(user) = self.find_user(user_id).await? else {
            return Ok(None);
        };

        let enrollments = sqlx::query_as::<_, Enrollment>(
            "SELECT id, user_id, name, created_at, updated_at \
             FROM enrollments WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load enrollments", e)
        })?;

        Ok(Some(UserWithEnrollments { user, enrollments }))
    }

    async fn find_room(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at \
             FROM rooms WHERE id = $1",
        )
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    async fn find_bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE room_id = $1 ORDER BY id"
        ))
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list room bookings", e)
        })
    }

    async fn find_booking_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    async fn create_booking(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(&format!(
            "INSERT INTO bookings (user_id, room_id) VALUES ($1, $2) \
             ON CONFLICT (room_id) DO NOTHING \
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(user_id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    async fn update_booking_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<Option<Booking>> {
        let result = sqlx::query_as::<_, Booking>(&format!(
            "UPDATE bookings SET room_id = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(booking_id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(booking) => Ok(booking),
            Err(e) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to update booking",
                e,
            )),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
