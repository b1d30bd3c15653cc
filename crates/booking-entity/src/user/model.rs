//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use booking_core::types::UserId;

use crate::booking::BookingWithRoom;
use crate::enrollment::Enrollment;

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A user together with every booking it holds, each joined to its room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithBookings {
    /// The user record.
    pub user: User,
    /// Bookings ordered by ascending id.
    pub bookings: Vec<BookingWithRoom>,
}

impl UserWithBookings {
    /// The booking the user currently holds, if any.
    pub fn current_booking(&self) -> Option<&BookingWithRoom> {
        self.bookings.first()
    }
}

/// A user together with its enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithEnrollments {
    /// The user record.
    pub user: User,
    /// Enrollments owned by the user.
    pub enrollments: Vec<Enrollment>,
}

impl UserWithEnrollments {
    /// Whether the user holds an enrollment and may therefore book a room.
    pub fn is_entitled(&self) -> bool {
        !self.enrollments.is_empty()
    }
}
