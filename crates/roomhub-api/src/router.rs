//! Route definitions for the RoomHub HTTP API.
//!
//! Every booking route requires a bearer token; `/health` is public.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router and thread `AppState` through every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(booking_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Booking endpoints: read, create, move
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/booking",
            get(handlers::booking::get_booking).post(handlers::booking::create_booking),
        )
        .route(
            "/booking/{booking_id}",
            put(handlers::booking::update_booking).patch(handlers::booking::update_booking),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
