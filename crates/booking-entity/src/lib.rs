//! # booking-entity
//!
//! Domain entity models for the hotel booking service. Every struct in
//! this crate represents a database table row or a joined read model.
//! Row types derive `sqlx::FromRow`.

pub mod booking;
pub mod enrollment;
pub mod room;
pub mod user;
