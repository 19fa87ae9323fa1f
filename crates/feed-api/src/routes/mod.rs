//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{routing::get, Router};

use crate::handlers::{feed, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(feed_routes())
}

/// Feed routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(feed::get_combined_feed))
        .route("/feed/following", get(feed::get_following_feed))
        .route("/feed/tags", get(feed::get_tags_feed))
}
