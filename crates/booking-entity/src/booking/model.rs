//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use booking_core::types::{BookingId, RoomId, UserId};

use crate::room::Room;

/// Assignment of exactly one room to exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// User holding the booking.
    pub user_id: UserId,
    /// Room assigned to the user.
    pub room_id: RoomId,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last reassigned.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the booking belongs to `user_id`.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// A booking joined to the room it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingWithRoom {
    /// The booking row.
    pub booking: Booking,
    /// The room the booking holds.
    pub room: Room,
}
