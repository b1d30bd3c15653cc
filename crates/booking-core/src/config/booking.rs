//! Booking assignment rules.

use serde::{Deserialize, Serialize};

/// Tunables for the booking assignment service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Whether reassigning a booking to the room it already holds succeeds
    /// as a no-op. When `false`, the occupancy check rejects it with 403.
    #[serde(default = "default_true")]
    pub allow_same_room_reassign: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            allow_same_room_reassign: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
