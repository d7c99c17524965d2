//! Integration tests for the booking endpoints.

mod helpers;

use futures::future::join_all;
use http::StatusCode;
use serde_json::json;

use roomhub_core::types::UserId;
use roomhub_database::BookingStore;
use roomhub_entity::ticket::TicketStatus;

#[tokio::test]
async fn test_get_booking_without_booking() {
    let app = helpers::TestApp::new();
    let token = app.eligible_user(1).await;

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "BOOKING_NOT_FOUND");
}

#[tokio::test]
async fn test_get_booking_returns_room() {
    let app = helpers::TestApp::new();
    let room = app.create_room(3).await;
    let token = app.eligible_user(1).await;
    let booking_id = app.book(&token, &room).await;

    let response = app.request("GET", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], booking_id);
    assert_eq!(response.body["Room"]["id"], room.id.get());
    assert_eq!(response.body["Room"]["capacity"], 3);
    assert_eq!(response.body["Room"]["hotelId"], room.hotel_id.get());
}

#[tokio::test]
async fn test_create_without_enrollment() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app.login(1).await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "NOT_ELIGIBLE");
}

#[tokio::test]
async fn test_create_without_ticket() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    app.store.add_enrollment(UserId(1), "Participant").await;
    let token = app.login(1).await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_with_remote_ticket() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app.user_with_ticket(1, TicketStatus::Paid, true, true).await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "NOT_ELIGIBLE");
}

#[tokio::test]
async fn test_create_with_ticket_without_hotel() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app.user_with_ticket(1, TicketStatus::Paid, false, false).await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_with_unpaid_ticket() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app
        .user_with_ticket(1, TicketStatus::Reserved, false, true)
        .await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "NOT_ELIGIBLE");
}

#[tokio::test]
async fn test_create_in_full_room() {
    let app = helpers::TestApp::new();
    let room = app.create_room(3).await;
    for user in 10..13 {
        let token = app.eligible_user(user).await;
        app.book(&token, &room).await;
    }
    let token = app.eligible_user(1).await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "ROOM_FULL");
}

#[tokio::test]
async fn test_create_with_invalid_room_ids() {
    let app = helpers::TestApp::new();
    let token = app.eligible_user(1).await;

    for body in [
        json!({ "roomId": 0 }),
        json!({ "roomId": -1 }),
        json!({ "roomId": "abc" }),
        json!({ "roomId": 99999 }),
        json!({}),
    ] {
        let response = app
            .request("POST", "/booking", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "body {body}");
        assert_eq!(response.body["error"], "ROOM_NOT_FOUND");
    }
}

#[tokio::test]
async fn test_create_when_already_booked() {
    let app = helpers::TestApp::new();
    let room = app.create_room(5).await;
    let token = app.eligible_user(1).await;
    app.book(&token, &room).await;

    for body in [json!({ "roomId": room.id.get() }), json!({ "roomId": 0 })] {
        let response = app.request("POST", "/booking", Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["error"], "ALREADY_BOOKED");
    }
}

#[tokio::test]
async fn test_create_with_malformed_body() {
    let app = helpers::TestApp::new();
    let token = app.eligible_user(1).await;

    let response = app.request("POST", "/booking", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_create_booking_success() {
    let app = helpers::TestApp::new();
    let room = app.create_room(2).await;
    let token = app.eligible_user(1).await;

    let response = app
        .request("POST", "/booking", Some(json!({ "roomId": room.id.get() })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let booking_id = response.body["bookingId"].as_i64().unwrap();
    assert!(booking_id > 0);

    let current = app.request("GET", "/booking", None, Some(&token)).await;
    assert_eq!(current.body["id"], booking_id);
    assert_eq!(current.body["Room"]["id"], room.id.get());
}

#[tokio::test]
async fn test_concurrent_creates_against_single_place() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let mut tokens = Vec::new();
    for user in 1..=10 {
        tokens.push(app.eligible_user(user).await);
    }

    let attempts = tokens.iter().map(|token| {
        app.request(
            "POST",
            "/booking",
            Some(json!({ "roomId": room.id.get() })),
            Some(token),
        )
    });
    let responses = join_all(attempts).await;

    let accepted = responses
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    assert_eq!(accepted, 1);
    assert!(
        responses
            .iter()
            .filter(|r| r.status != StatusCode::OK)
            .all(|r| r.status == StatusCode::FORBIDDEN && r.body["error"] == "ROOM_FULL")
    );
    assert_eq!(app.store.count_bookings_for_room(room.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_to_unknown_room() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app.eligible_user(1).await;
    let booking_id = app.book(&token, &room).await;

    let response = app
        .request(
            "PUT",
            &format!("/booking/{booking_id}"),
            Some(json!({ "roomId": 0 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "ROOM_NOT_FOUND");
}

#[tokio::test]
async fn test_update_someone_elses_booking() {
    let app = helpers::TestApp::new();
    let room = app.create_room(2).await;
    let other_room = app.create_room(2).await;
    let owner = app.eligible_user(1).await;
    let intruder = app.eligible_user(2).await;
    let booking_id = app.book(&owner, &room).await;

    let response = app
        .request(
            "PUT",
            &format!("/booking/{booking_id}"),
            Some(json!({ "roomId": other_room.id.get() })),
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "NOT_PERMITTED");

    let current = app.request("GET", "/booking", None, Some(&owner)).await;
    assert_eq!(current.body["Room"]["id"], room.id.get());
}

#[tokio::test]
async fn test_update_with_non_numeric_booking_id() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app.eligible_user(1).await;

    let response = app
        .request(
            "PUT",
            "/booking/abc",
            Some(json!({ "roomId": room.id.get() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_booking() {
    let app = helpers::TestApp::new();
    let room = app.create_room(1).await;
    let token = app.eligible_user(1).await;

    let response = app
        .request(
            "PUT",
            "/booking/4242",
            Some(json!({ "roomId": room.id.get() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "BOOKING_NOT_FOUND");
}

#[tokio::test]
async fn test_update_into_full_room() {
    let app = helpers::TestApp::new();
    let home = app.create_room(1).await;
    let full = app.create_room(1).await;
    let neighbour = app.eligible_user(9).await;
    app.book(&neighbour, &full).await;
    let token = app.eligible_user(1).await;
    let booking_id = app.book(&token, &home).await;

    let response = app
        .request(
            "PUT",
            &format!("/booking/{booking_id}"),
            Some(json!({ "roomId": full.id.get() })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "ROOM_FULL");
}

#[tokio::test]
async fn test_update_booking_success() {
    let app = helpers::TestApp::new();
    let first = app.create_room(1).await;
    let second = app.create_room(1).await;
    let token = app.eligible_user(1).await;
    let booking_id = app.book(&token, &first).await;

    for method in ["PUT", "PATCH"] {
        let target = if method == "PUT" { &second } else { &first };
        let response = app
            .request(
                method,
                &format!("/booking/{booking_id}"),
                Some(json!({ "roomId": target.id.get() })),
                Some(&token),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "{method}");
        assert_eq!(response.body["bookingId"], booking_id);

        let current = app.request("GET", "/booking", None, Some(&token)).await;
        assert_eq!(current.body["Room"]["id"], target.id.get());
    }

    assert_eq!(app.store.count_bookings_for_room(first.id).await.unwrap(), 1);
    assert_eq!(app.store.count_bookings_for_room(second.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
