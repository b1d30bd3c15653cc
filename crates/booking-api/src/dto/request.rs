//! Request DTOs.

use serde::{Deserialize, Serialize};

use booking_core::types::RoomId;

/// Body of `POST /booking` and `PUT /booking/{bookingId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Room to book or move to.
    pub room_id: RoomId,
}
