//! User domain entities.

pub mod model;

pub use model::{User, UserWithBookings, UserWithEnrollments};
