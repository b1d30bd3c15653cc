//! Core type definitions used across the booking workspace.

pub mod id;

pub use id::*;
