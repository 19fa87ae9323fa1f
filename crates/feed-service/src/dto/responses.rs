//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use feed_core::value_objects::{ItemId, PostId, TagId, UserId};

// ============================================================================
// Feed Responses
// ============================================================================

/// Feed page envelope
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<FeedEntryResponse>,
}

/// One feed entry
#[derive(Debug, Clone, Serialize)]
pub struct FeedEntryResponse {
    pub id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorSummaryResponse,
    pub item: ItemSummaryResponse,
    pub like_count: i64,
    pub comment_count: i64,
    pub tags: Vec<TagSummaryResponse>,
}

/// Embedded author summary
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummaryResponse {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Embedded item summary
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummaryResponse {
    pub id: ItemId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Embedded tag summary
#[derive(Debug, Clone, Serialize)]
pub struct TagSummaryResponse {
    pub id: TagId,
    pub name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let response = HealthResponse::healthy();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn test_readiness_response() {
        assert_eq!(ReadinessResponse::ready(true).status, "ready");
        assert_eq!(ReadinessResponse::ready(false).status, "not_ready");
    }
}
