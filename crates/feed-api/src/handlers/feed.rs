//! Feed handlers
//!
//! Endpoints for the combined feed and the two unmixed sources.

use axum::{extract::State, Json};
use feed_service::{FeedResponse, FeedService};

use crate::extractors::{Page, Viewer};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the viewer's combined feed (followed users + followed tags)
///
/// GET /api/v1/feed
pub async fn get_combined_feed(
    State(state): State<AppState>,
    viewer: Viewer,
    page: Page,
) -> ApiResult<Json<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let entries = service
        .combined_feed(viewer.user_id, page.limit, page.offset)
        .await?;
    Ok(Json(FeedResponse::from(entries)))
}

/// Get the feed of posts by followed users only
///
/// GET /api/v1/feed/following
pub async fn get_following_feed(
    State(state): State<AppState>,
    viewer: Viewer,
    page: Page,
) -> ApiResult<Json<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let entries = service
        .users_feed(viewer.user_id, page.limit, page.offset)
        .await?;
    Ok(Json(FeedResponse::from(entries)))
}

/// Get the feed of posts carrying followed tags only
///
/// GET /api/v1/feed/tags
pub async fn get_tags_feed(
    State(state): State<AppState>,
    viewer: Viewer,
    page: Page,
) -> ApiResult<Json<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let entries = service
        .tags_feed(viewer.user_id, page.limit, page.offset)
        .await?;
    Ok(Json(FeedResponse::from(entries)))
}
