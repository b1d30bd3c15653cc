//! Booking assignment: read, create, and reassign a user's room.

pub mod service;

pub use service::{BookingService, CurrentBooking};
