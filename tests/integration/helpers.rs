//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use booking_auth::JwtEncoder;
use booking_core::config::{AppConfig, BookingConfig};
use booking_core::types::{HotelId, UserId};
use booking_database::MemoryBookingStore;
use booking_entity::room::Room;
use booking_entity::user::User;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store backing the router, for seeding and direct reads
    pub store: MemoryBookingStore,
    /// Application config
    pub config: AppConfig,
    users: AtomicUsize,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        Self::with_booking_config(BookingConfig::default())
    }

    /// Create a test application with custom booking rules
    pub fn with_booking_config(booking: BookingConfig) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.booking = booking;

        let store = MemoryBookingStore::new();
        let state = booking_api::AppState::new(config.clone(), Arc::new(store.clone()));
        let router = booking_api::build_app(state, &config.server.cors);

        Self {
            router,
            store,
            config,
            users: AtomicUsize::new(0),
        }
    }

    /// Create a user without an enrollment
    pub async fn create_user(&self) -> User {
        let n = self.users.fetch_add(1, Ordering::Relaxed);
        self.store.insert_user(&format!("guest{n}@example.com")).await
    }

    /// Create a user holding an enrollment
    pub async fn create_entitled_user(&self) -> User {
        let user = self.create_user().await;
        self.store.insert_enrollment(user.id, "Guest").await;
        user
    }

    /// Create a room in hotel 1
    pub async fn create_room(&self, name: &str) -> Room {
        self.store.insert_room(HotelId(1), name, 3).await
    }

    /// Issue an access token for `user_id`
    pub fn token_for(&self, user_id: UserId) -> String {
        let (token, _) = JwtEncoder::new(&self.config.auth)
            .expect("Invalid auth config")
            .generate_access_token(user_id)
            .expect("Failed to issue token");
        token
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
