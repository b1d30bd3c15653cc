//! Route definitions for the booking HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(booking_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Booking read, create and reassign.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/booking",
            get(handlers::booking::get_booking).post(handlers::booking::post_booking),
        )
        .route("/booking/{bookingId}", put(handlers::booking::put_booking))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
