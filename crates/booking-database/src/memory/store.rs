//! In-memory booking store.
//!
//! All tables live behind one `RwLock`, so the occupancy check inside
//! each conditional write happens under the same write guard as the
//! write itself.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use booking_core::result::AppResult;
use booking_core::types::{BookingId, EnrollmentId, HotelId, RoomId, UserId};
use booking_entity::booking::{Booking, BookingWithRoom};
use booking_entity::enrollment::Enrollment;
use booking_entity::room::Room;
use booking_entity::user::{User, UserWithBookings, UserWithEnrollments};

use crate::store::BookingStore;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    enrollments: BTreeMap<EnrollmentId, Enrollment>,
    rooms: BTreeMap<RoomId, Room>,
    bookings: BTreeMap<BookingId, Booking>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn room_taken_by_other(&self, room_id: RoomId, except: Option<BookingId>) -> bool {
        self.bookings
            .values()
            .any(|b| b.room_id == room_id && Some(b.id) != except)
    }
}

/// Booking store kept in process memory.
///
/// Cloning shares the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookingStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user account.
    pub async fn insert_user(&self, email: &str) -> User {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let user = User {
            id: UserId(tables.next_id()),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    /// Add an enrollment for `user_id`.
    pub async fn insert_enrollment(&self, user_id: UserId, name: &str) -> Enrollment {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let enrollment = Enrollment {
            id: EnrollmentId(tables.next_id()),
            user_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.enrollments.insert(enrollment.id, enrollment.clone());
        enrollment
    }

    /// Add a room to `hotel_id`.
    pub async fn insert_room(&self, hotel_id: HotelId, name: &str, capacity: i32) -> Room {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let room = Room {
            id: RoomId(tables.next_id()),
            name: name.to_string(),
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        };
        tables.rooms.insert(room.id, room.clone());
        room
    }

    /// Number of booking rows.
    pub async fn booking_count(&self) -> usize {
        self.tables.read().await.bookings.len()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn find_user_with_booking_and_room(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<UserWithBookings>> {
        let tables = self.tables.read().await;
        let Some(user) = tables.users.get(&user_id).cloned() else {
            return Ok(None);
        };

        let bookings = tables
            .bookings
            .values()
            .filter(|b| b.user_id == user_id)
            .filter_map(|b| {
                tables.rooms.get(&b.room_id).map(|room| BookingWithRoom {
                    booking: b.clone(),
                    room: room.clone(),
                })
            })
            .collect();

        Ok(Some(UserWithBookings { user, bookings }))
    }

    async fn find_user_with_enrollment(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<UserWithEnrollments>> {
        let tables = self.tables.read().await;
        let Some(user) = tables.users.get(&user_id).cloned() else {
            return Ok(None);
        };

        let enrollments = tables
            .enrollments
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();

        Ok(Some(UserWithEnrollments { user, enrollments }))
    }

    async fn find_room(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        Ok(self.tables.read().await.rooms.get(&room_id).cloned())
    }

    async fn find_bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>> {
        let tables = self.tables.read().await;
        Ok(tables
            .bookings
            .values()
            .filter(|b| b.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn find_booking_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self.tables.read().await.bookings.get(&booking_id).cloned())
    }

    async fn create_booking(
        &self,
        user_id: UserId,
        room_id: RoomId,
    ) -> AppResult<Option<Booking>> {
        let mut tables = self.tables.write().await;
        if tables.room_taken_by_other(room_id, None) {
            debug!(room_id = %room_id, "Insert skipped, room already held");
            return Ok(None);
        }

        let now = Utc::now();
        let booking = Booking {
            id: BookingId(tables.next_id()),
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        };
        tables.bookings.insert(booking.id, booking.clone());
        Ok(Some(booking))
    }

    async fn update_booking_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<Option<Booking>> {
        let mut tables = self.tables.write().await;
        if tables.room_taken_by_other(room_id, Some(booking_id)) {
            debug!(room_id = %room_id, booking_id = %booking_id, "Update skipped, room already held");
            return Ok(None);
        }

        let Some(booking) = tables.bookings.get_mut(&booking_id) else {
            return Ok(None);
        };
        booking.room_id = room_id;
        booking.updated_at = Utc::now();
        Ok(Some(booking.clone()))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
