//! Booking assignment service.

use std::sync::Arc;

use tracing::{debug, info};

use booking_core::config::BookingConfig;
use booking_core::error::AppError;
use booking_core::types::{BookingId, RoomId};
use booking_database::store::BookingStore;
use booking_entity::room::Room;

use crate::context::RequestContext;

const ROOM_OCCUPIED: &str = "Room already booked";

/// The booking a user currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentBooking {
    /// Booking identifier.
    pub id: BookingId,
    /// The booked room.
    pub room: Room,
}

/// Assigns rooms to entitled users, one occupant per room and one room
/// per booking.
///
/// Every operation checks in a fixed order and stops at the first
/// failure, so a request that breaks several rules always gets the same
/// answer. Room occupancy is checked before the write to keep that order
/// and enforced again by the store's conditional write.
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
    config: BookingConfig,
}

impl std::fmt::Debug for BookingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(store: Arc<dyn BookingStore>, config: BookingConfig) -> Self {
        Self { store, config }
    }

    /// Returns the caller's booking and its room.
    pub async fn get_current_booking(
        &self,
        ctx: &RequestContext,
    ) -> Result<CurrentBooking, AppError> {
        let user = self
            .store
            .find_user_with_booking_and_room(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let current = user
            .current_booking()
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        Ok(CurrentBooking {
            id: current.booking.id,
            room: current.room.clone(),
        })
    }

    /// Books `room_id` for the caller.
    pub async fn create_booking(
        &self,
        ctx: &RequestContext,
        room_id: RoomId,
    ) -> Result<BookingId, AppError> {
        self.require_room(room_id).await?;
        self.ensure_room_free(room_id).await?;

        let user = self
            .store
            .find_user_with_enrollment(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        if !user.is_entitled() {
            return Err(AppError::not_found("Enrollment not found"));
        }

        let booking = self
            .store
            .create_booking(ctx.user_id, room_id)
            .await?
            .ok_or_else(|| AppError::forbidden(ROOM_OCCUPIED))?;

        info!(
            user_id = %ctx.user_id,
            booking_id = %booking.id,
            room_id = %room_id,
            "Booking created"
        );

        Ok(booking.id)
    }

    /// Moves the caller's booking `booking_id` to `room_id`.
    ///
    /// A booking that does not exist and one owned by someone else both
    /// yield `NotFound`.
    pub async fn reassign_booking(
        &self,
        ctx: &RequestContext,
        room_id: RoomId,
        booking_id: BookingId,
    ) -> Result<BookingId, AppError> {
        self.require_room(room_id).await?;

        let booking = self
            .store
            .find_booking_by_id(booking_id)
            .await?
            .filter(|b| b.is_owned_by(ctx.user_id));

        if self.config.allow_same_room_reassign
            && booking.as_ref().is_some_and(|b| b.room_id == room_id)
        {
            debug!(booking_id = %booking_id, room_id = %room_id, "Booking already holds room");
            return Ok(booking_id);
        }

        self.ensure_room_free(room_id).await?;

        let Some(booking) = booking else {
            return Err(AppError::not_found("Booking not found"));
        };

        let updated = self
            .store
            .update_booking_room(booking.id, room_id)
            .await?
            .ok_or_else(|| AppError::forbidden(ROOM_OCCUPIED))?;

        info!(
            user_id = %ctx.user_id,
            booking_id = %updated.id,
            from_room_id = %booking.room_id,
            room_id = %room_id,
            "Booking reassigned"
        );

        Ok(updated.id)
    }

    async fn require_room(&self, room_id: RoomId) -> Result<Room, AppError> {
        self.store
            .find_room(room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))
    }

    async fn ensure_room_free(&self, room_id: RoomId) -> Result<(), AppError> {
        let bookings = self.store.find_bookings_for_room(room_id).await?;
        if bookings.is_empty() {
            Ok(())
        } else {
            Err(AppError::forbidden(ROOM_OCCUPIED))
        }
    }
}
