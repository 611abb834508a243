mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_event(app: &TestApp, seats: i32) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/events")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "title": "Tech Meetup",
                "date": "2026-10-01",
                "location": "Hall A",
                "category": "Tech",
                "description": "Talks and snacks",
                "seats": seats,
                "image": "https://img.example/m.png",
                "organizer": { "name": "Admin Event", "email": "admin@eventech.com" }
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn book(app: &TestApp, event_id: &str, email: &str, tickets: i32) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "eventId": event_id,
                "userName": "Alice",
                "userEmail": email,
                "phone": "+4915112345678",
                "tickets": tickets,
                "paymentMethod": "Credit Card"
            }).to_string())).unwrap()
    ).await.unwrap()
}

async fn seats_of(app: &TestApp, event_id: &str) -> i64 {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/event/{}", event_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    parse_body(res).await["seats"].as_i64().unwrap()
}

#[tokio::test]
async fn test_booking_decrements_seats_and_blocks_oversized_requests() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, 10).await;

    let res = book(&app, &event_id, "a@a.com", 3).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "ACTIVE");
    assert_eq!(body["tickets"], 3);
    assert_eq!(seats_of(&app, &event_id).await, 7);

    // 8 > 7 remaining: rejected whole, never partially applied.
    let res = book(&app, &event_id, "b@b.com", 8).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(seats_of(&app, &event_id).await, 7);
}

#[tokio::test]
async fn test_booking_zero_tickets_rejected_without_ledger_entry() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, 5).await;

    let res = book(&app, &event_id, "a@a.com", 0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let ledger_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ledger_entries")
        .fetch_one(&app.pool).await.unwrap();
    assert_eq!(ledger_rows, 0);
    assert_eq!(seats_of(&app, &event_id).await, 5);
}

#[tokio::test]
async fn test_booking_unknown_event() {
    let app = TestApp::new().await;

    let res = book(&app, "no-such-event", "a@a.com", 1).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_bookings_filters_by_email() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, 10).await;

    let res = book(&app, &event_id, "alice@a.com", 2).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let res = book(&app, &event_id, "bob@b.com", 1).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/bookings?email=alice@a.com")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["userEmail"], "alice@a.com");
    assert_eq!(items[0]["eventTitle"], "Tech Meetup");
}

#[tokio::test]
async fn test_retry_with_same_booking_id_reserves_once() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, 10).await;

    let payload = json!({
        "bookingId": "retry-1234",
        "eventId": event_id,
        "userName": "Alice",
        "userEmail": "a@a.com",
        "phone": "+4915112345678",
        "tickets": 4,
        "paymentMethod": "PayPal"
    }).to_string();

    let first = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.clone())).unwrap()
    ).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(payload)).unwrap()
    ).await.unwrap();
    assert_eq!(second.status(), StatusCode::CREATED);
    let body = parse_body(second).await;
    assert_eq!(body["id"], "retry-1234");

    // The retry returned the existing record; seats went down once.
    assert_eq!(seats_of(&app, &event_id).await, 6);
}
