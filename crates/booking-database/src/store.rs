//! The data-access seam between the booking service and storage.

use async_trait::async_trait;

use booking_core::result::AppResult;
use booking_core::types::{BookingId, RoomId, UserId};
use booking_entity::booking::Booking;
use booking_entity::room::Room;
use booking_entity::user::{UserWithBookings, UserWithEnrollments};

/// Record reads and writes used by booking assignment.
///
/// Implementations carry no business rules. Absence is reported as
/// `None` or an empty `Vec`; only driver failures become errors.
///
/// The two writes are conditional: they return `None` instead of
/// writing when another booking already holds the target room, so
/// "one booking per room" holds even under concurrent requests.
#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    /// A user with its bookings, each joined to its room.
    async fn find_user_with_booking_and_room(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<UserWithBookings>>;

    /// A user with its enrollments.
    async fn find_user_with_enrollment(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<UserWithEnrollments>>;

    /// A room by id.
    async fn find_room(&self, room_id: RoomId) -> AppResult<Option<Room>>;

    /// Every booking pointing at `room_id`.
    async fn find_bookings_for_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>>;

    /// A booking by id.
    async fn find_booking_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;

    /// Insert a booking unless the room is already held.
    async fn create_booking(&self, user_id: UserId, room_id: RoomId)
    -> AppResult<Option<Booking>>;

    /// Point a booking at another room unless that room is already held.
    /// Also returns `None` when the booking no longer exists.
    async fn update_booking_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> AppResult<Option<Booking>>;

    /// Check that the backing store answers queries.
    async fn health_check(&self) -> AppResult<bool>;
}
