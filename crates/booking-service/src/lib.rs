//! # booking-service
//!
//! Business logic for hotel room bookings. [`BookingService`] enforces
//! entitlement, single occupancy, and ownership on top of a
//! [`booking_database::BookingStore`].
//!
//! Services follow constructor injection: the store is supplied at
//! construction time as an `Arc<dyn BookingStore>`.

pub mod booking;
pub mod context;

pub use booking::{BookingService, CurrentBooking};
pub use context::RequestContext;
