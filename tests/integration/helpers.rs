//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use roomhub_auth::JwtEncoder;
use roomhub_core::config::AppConfig;
use roomhub_core::types::{HotelId, UserId};
use roomhub_database::MemoryBookingStore;
use roomhub_entity::room::Room;
use roomhub_entity::ticket::TicketStatus;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory store for fixtures and direct assertions
    pub store: MemoryBookingStore,
    /// Application config
    pub config: AppConfig,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = MemoryBookingStore::new();
        let state = roomhub_api::AppState::new(
            config.clone(),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        );
        let router = roomhub_api::build_app(state);
        let encoder = JwtEncoder::new(&config.auth);

        Self {
            router,
            store,
            config,
            encoder,
        }
    }

    /// Issue a token for a user and register its session
    pub async fn login(&self, user: i32) -> String {
        let token = self
            .encoder
            .issue(UserId(user))
            .expect("Failed to issue token");
        self.store.add_session(UserId(user), &token).await;
        token
    }

    /// Enroll a user with a ticket of the given shape and log them in
    pub async fn user_with_ticket(
        &self,
        user: i32,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) -> String {
        let enrollment = self.store.add_enrollment(UserId(user), "Participant").await;
        let ticket_type = self
            .store
            .add_ticket_type("Ticket", is_remote, includes_hotel)
            .await;
        self.store
            .add_ticket(enrollment.id, ticket_type.id, status)
            .await;
        self.login(user).await
    }

    /// A user holding a paid, in-person ticket with hotel
    pub async fn eligible_user(&self, user: i32) -> String {
        self.user_with_ticket(user, TicketStatus::Paid, false, true)
            .await
    }

    /// Create a room in a test hotel
    pub async fn create_room(&self, capacity: i32) -> Room {
        self.store.add_room(HotelId(1), "Room", capacity).await
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

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

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

    /// POST /booking and return the new booking id
    pub async fn book(&self, token: &str, room: &Room) -> i64 {
        let response = self
            .request(
                "POST",
                "/booking",
                Some(serde_json::json!({ "roomId": room.id.get() })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["bookingId"]
            .as_i64()
            .expect("No bookingId in response")
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
