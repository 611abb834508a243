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
                "title": "Food Festival",
                "date": "2026-11-07",
                "location": "Riverside",
                "category": "Food",
                "seats": seats,
                "image": "https://img.example/f.png",
                "organizer": { "name": "Admin Event", "email": "admin@eventech.com" }
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn book(app: &TestApp, event_id: &str, tickets: i32) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "eventId": event_id,
                "userName": "Carol",
                "userEmail": "carol@c.com",
                "phone": "+4915100000000",
                "tickets": tickets,
                "paymentMethod": "Credit Card"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn seats_of(app: &TestApp, event_id: &str) -> i64 {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/event/{}", event_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    parse_body(res).await["seats"].as_i64().unwrap()
}

#[tokio::test]
async fn test_cancel_restores_seats_exactly_once() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, 5).await;

    let booking_id = book(&app, &event_id, 2).await;
    assert_eq!(seats_of(&app, &event_id).await, 3);

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/booking/{}", booking_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "CANCELLED");
    assert_eq!(seats_of(&app, &event_id).await, 5);

    // Second cancel is a no-op success, not a second release.
    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/booking/{}", booking_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "CANCELLED");
    assert_eq!(seats_of(&app, &event_id).await, 5);

    // Ledger nets to zero for the cancelled booking.
    let net: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(delta), 0) FROM ledger_entries WHERE booking_id = ?")
        .bind(&booking_id)
        .fetch_one(&app.pool).await.unwrap();
    assert_eq!(net, 0);
}

#[tokio::test]
async fn test_cancel_unknown_booking() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri("/booking/no-such-booking")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancelled_seats_are_bookable_again() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, 2).await;

    let booking_id = book(&app, &event_id, 2).await;
    assert_eq!(seats_of(&app, &event_id).await, 0);

    // Sold out while the first booking holds everything.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "eventId": event_id, "userName": "Dan", "userEmail": "dan@d.com",
                "phone": "1", "tickets": 1, "paymentMethod": "Cash"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/booking/{}", booking_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "eventId": event_id, "userName": "Dan", "userEmail": "dan@d.com",
                "phone": "1", "tickets": 2, "paymentMethod": "Cash"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(seats_of(&app, &event_id).await, 0);
}
