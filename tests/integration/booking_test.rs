//! Integration tests for the booking endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use booking_core::config::BookingConfig;
use booking_core::types::{BookingId, UserId};
use booking_database::BookingStore;

use helpers::TestApp;

async fn book(app: &TestApp, token: &str, room_id: i32) -> i64 {
    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room_id })), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["id"].as_i64().expect("numeric booking id")
}

// ── GET /booking ──────────────────────────────────────────────────

#[tokio::test]
async fn test_get_booking_returns_booking_and_room() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let room = app.create_room("101").await;
    let token = app.token_for(user.id);
    let id = book(&app, &token, room.id.get()).await;

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    let room_body = &response.body["Room"];
    assert_eq!(room_body["id"], room.id.get());
    assert_eq!(room_body["name"], "101");
    assert_eq!(room_body["capacity"], 3);
    assert_eq!(room_body["hotelId"], 1);
    assert!(room_body["createdAt"].is_string());
    assert!(room_body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_get_booking_without_booking_is_404() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let token = app.token_for(user.id);

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_booking_for_unknown_user_is_404() {
    let app = TestApp::new();
    let token = app.token_for(UserId(0));

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_booking_does_not_show_other_users_booking() {
    let app = TestApp::new();
    let owner = app.create_entitled_user().await;
    let other = app.create_entitled_user().await;
    let room = app.create_room("101").await;
    book(&app, &app.token_for(owner.id), room.id.get()).await;

    let response = app
        .request("GET", "/booking", None, Some(&app.token_for(other.id)))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// ── POST /booking ─────────────────────────────────────────────────

#[tokio::test]
async fn test_post_booking_returns_id_and_persists_one_row() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let room = app.create_room("101").await;

    let id = book(&app, &app.token_for(user.id), room.id.get()).await;

    assert_eq!(app.store.booking_count().await, 1);
    let stored = app
        .store
        .find_booking_by_id(BookingId(id as i32))
        .await
        .unwrap()
        .expect("booking stored");
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.room_id, room.id);
}

#[tokio::test]
async fn test_post_booking_without_enrollment_is_404() {
    let app = TestApp::new();
    let user = app.create_user().await;
    let room = app.create_room("101").await;

    let response = app
        .request(
            "POST",
            "/booking",
            Some(json!({ "roomId": room.id.get() })),
            Some(&app.token_for(user.id)),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.booking_count().await, 0);
}

#[tokio::test]
async fn test_post_booking_for_unknown_room_is_404() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let token = app.token_for(user.id);

    for room_id in [0, 9999] {
        let response = app
            .request("POST", "/booking", Some(json!({ "roomId": room_id })), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "roomId {room_id}");
    }
}

#[tokio::test]
async fn test_post_booking_on_booked_room_is_403() {
    let app = TestApp::new();
    let first = app.create_entitled_user().await;
    let second = app.create_entitled_user().await;
    let room = app.create_room("101").await;
    book(&app, &app.token_for(first.id), room.id.get()).await;

    let response = app
        .request(
            "POST",
            "/booking",
            Some(json!({ "roomId": room.id.get() })),
            Some(&app.token_for(second.id)),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(app.store.booking_count().await, 1);
}

#[tokio::test]
async fn test_concurrent_posts_for_one_room_book_it_once() {
    let app = TestApp::new();
    let room = app.create_room("101").await;
    let mut tokens = Vec::new();
    for _ in 0..6 {
        let user = app.create_entitled_user().await;
        tokens.push(app.token_for(user.id));
    }

    let responses = futures::future::join_all(tokens.iter().map(|token| {
        app.request(
            "POST",
            "/booking",
            Some(json!({ "roomId": room.id.get() })),
            Some(token),
        )
    }))
    .await;

    let ok = responses
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    let forbidden = responses
        .iter()
        .filter(|r| r.status == StatusCode::FORBIDDEN)
        .count();
    assert_eq!(ok, 1);
    assert_eq!(forbidden, responses.len() - 1);
    assert_eq!(app.store.booking_count().await, 1);
}

#[tokio::test]
async fn test_post_booking_with_malformed_body_is_400() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let token = app.token_for(user.id);

    for body in ["", "{", r#"{"roomId":"abc"}"#, r#"{"room":1}"#] {
        let response = app
            .raw_request("POST", "/booking", body.to_string(), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body {body:?}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

// ── PUT /booking/{bookingId} ──────────────────────────────────────

#[tokio::test]
async fn test_put_booking_moves_to_free_room() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let r1 = app.create_room("101").await;
    let r2 = app.create_room("102").await;
    let token = app.token_for(user.id);
    let id = book(&app, &token, r1.id.get()).await;

    let response = app
        .request(
            "PUT",
            &format!("/booking/{id}"),
            Some(json!({ "roomId": r2.id.get() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);

    let current = app.request("GET", "/booking", None, Some(&token)).await;
    assert_eq!(current.body["Room"]["id"], r2.id.get());
}

#[tokio::test]
async fn test_put_booking_to_booked_room_is_403() {
    let app = TestApp::new();
    let a = app.create_entitled_user().await;
    let b = app.create_entitled_user().await;
    let r1 = app.create_room("101").await;
    let r2 = app.create_room("102").await;
    let token_a = app.token_for(a.id);
    let id = book(&app, &token_a, r1.id.get()).await;
    book(&app, &app.token_for(b.id), r2.id.get()).await;

    let response = app
        .request(
            "PUT",
            &format!("/booking/{id}"),
            Some(json!({ "roomId": r2.id.get() })),
            Some(&token_a),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_put_booking_owned_by_someone_else_is_404() {
    let app = TestApp::new();
    let owner = app.create_entitled_user().await;
    let intruder = app.create_entitled_user().await;
    let r1 = app.create_room("101").await;
    let r2 = app.create_room("102").await;
    let id = book(&app, &app.token_for(owner.id), r1.id.get()).await;

    let response = app
        .request(
            "PUT",
            &format!("/booking/{id}"),
            Some(json!({ "roomId": r2.id.get() })),
            Some(&app.token_for(intruder.id)),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let stored = app
        .store
        .find_booking_by_id(BookingId(id as i32))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.room_id, r1.id);
}

#[tokio::test]
async fn test_put_booking_with_unknown_room_or_booking_is_404() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let r1 = app.create_room("101").await;
    let r2 = app.create_room("102").await;
    let token = app.token_for(user.id);
    let id = book(&app, &token, r1.id.get()).await;

    let unknown_room = app
        .request(
            "PUT",
            &format!("/booking/{id}"),
            Some(json!({ "roomId": 0 })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown_room.status, StatusCode::NOT_FOUND);

    let unknown_booking = app
        .request(
            "PUT",
            "/booking/9999",
            Some(json!({ "roomId": r2.id.get() })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown_booking.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_booking_with_non_numeric_id_is_400() {
    let app = TestApp::new();
    let user = app.create_entitled_user().await;
    let room = app.create_room("101").await;

    let response = app
        .request(
            "PUT",
            "/booking/abc",
            Some(json!({ "roomId": room.id.get() })),
            Some(&app.token_for(user.id)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_booking_to_its_own_room_follows_config() {
    let lenient = TestApp::new();
    let user = lenient.create_entitled_user().await;
    let room = lenient.create_room("101").await;
    let token = lenient.token_for(user.id);
    let id = book(&lenient, &token, room.id.get()).await;
    let response = lenient
        .request(
            "PUT",
            &format!("/booking/{id}"),
            Some(json!({ "roomId": room.id.get() })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);

    let strict = TestApp::with_booking_config(BookingConfig {
        allow_same_room_reassign: false,
    });
    let user = strict.create_entitled_user().await;
    let room = strict.create_room("101").await;
    let token = strict.token_for(user.id);
    let id = book(&strict, &token, room.id.get()).await;
    let response = strict
        .request(
            "PUT",
            &format!("/booking/{id}"),
            Some(json!({ "roomId": room.id.get() })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

// ── Authentication ────────────────────────────────────────────────

#[tokio::test]
async fn test_booking_routes_require_valid_token() {
    let app = TestApp::new();

    let missing = app.request("GET", "/booking", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["error"], "UNAUTHORIZED");

    let garbage = app
        .request("POST", "/booking", Some(json!({ "roomId": 1 })), Some("garbage"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let other_secret = {
        let mut auth = app.config.auth.clone();
        auth.jwt_secret = "some-other-secret".to_string();
        booking_auth::JwtEncoder::new(&auth)
            .unwrap()
            .generate_access_token(UserId(1))
            .unwrap()
            .0
    };
    let forged = app
        .request("PUT", "/booking/1", Some(json!({ "roomId": 1 })), Some(&other_secret))
        .await;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
}

// ── Health ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_reports_connected_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["version"].is_string());
}
