//! Enrollment domain entities.

pub mod model;

pub use model::Enrollment;
