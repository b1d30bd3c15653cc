//! Enrollment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use booking_core::types::{EnrollmentId, UserId};

/// Registration created by the ticket purchase flow. Holding one is what
/// entitles a user to book a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Unique enrollment identifier.
    pub id: EnrollmentId,
    /// Owning user.
    pub user_id: UserId,
    /// Name on the registration.
    pub name: String,
    /// When the enrollment was created.
    pub created_at: DateTime<Utc>,
    /// When the enrollment was last updated.
    pub updated_at: DateTime<Utc>,
}
