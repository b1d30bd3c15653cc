//! # booking-api
//!
//! HTTP API layer for the hotel booking service built on Axum.
//!
//! Provides the booking and health endpoints, middleware (CORS, request
//! logging), the bearer-token extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
