//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use booking_core::types::{HotelId, RoomId};

/// A bookable hotel room.
///
/// Serialized in camelCase because it is returned verbatim by
/// `GET /booking`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Room label, e.g. the door number.
    pub name: String,
    /// Number of guests the room sleeps.
    pub capacity: i32,
    /// Hotel the room belongs to.
    pub hotel_id: HotelId,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}
