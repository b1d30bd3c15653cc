//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use booking_auth::JwtDecoder;
use booking_core::config::AppConfig;
use booking_database::BookingStore;
use booking_service::BookingService;

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Backing store, also used by the health probe.
    pub store: Arc<dyn BookingStore>,
    /// Bearer token validation.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Booking rules.
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wires the service layer on top of `store`.
    pub fn new(config: AppConfig, store: Arc<dyn BookingStore>) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let booking_service = Arc::new(BookingService::new(
            Arc::clone(&store),
            config.booking.clone(),
        ));

        Self {
            config: Arc::new(config),
            store,
            jwt_decoder,
            booking_service,
        }
    }
}
