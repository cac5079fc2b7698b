//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{eggs, events, health, rooms, trays, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(room_routes())
        .merge(egg_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/@me/rooms", get(users::list_my_rooms))
        .route("/users/:user_id", get(users::get_user))
}

/// Room routes
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", post(rooms::create_room))
        .route("/rooms/:room_id/join", post(rooms::join_room))
        .route("/rooms/:room_id/summary", get(rooms::get_room_summary))
        .route("/rooms/:room_id/trays", post(trays::create_tray))
        .route("/rooms/:room_id/events", get(events::room_events))
}

/// Egg routes
fn egg_routes() -> Router<AppState> {
    Router::new().route("/eggs/:egg_id/toggle", post(eggs::toggle_egg))
}
