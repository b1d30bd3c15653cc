//! Response DTOs.

use serde::{Deserialize, Serialize};

use booking_core::types::BookingId;
use booking_entity::room::Room;
use booking_service::CurrentBooking;

/// Body of `GET /booking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentBookingResponse {
    /// Booking ID.
    pub id: BookingId,
    /// The booked room.
    #[serde(rename = "Room")]
    pub room: Room,
}

impl From<CurrentBooking> for CurrentBookingResponse {
    fn from(current: CurrentBooking) -> Self {
        Self {
            id: current.id,
            room: current.room,
        }
    }
}

/// Body returned by booking writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingIdResponse {
    /// Booking ID.
    pub id: BookingId,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `connected` or `unreachable`.
    pub database: String,
}
