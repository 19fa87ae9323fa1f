//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every lookup that can involve more than
//! one row is batch-by-id-set and returns a map, so callers join in
//! memory instead of issuing one query per row.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::entities::{Item, Photo, Post, Tag, User};
use crate::error::DomainError;
use crate::value_objects::{ItemId, PhotoId, PostId, TagId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Relationship Repository
// ============================================================================

/// Read access to the follow graph (user→user and user→tag edges)
#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// Ids of all users the viewer follows
    async fn followed_user_ids(&self, viewer_id: UserId) -> RepoResult<HashSet<UserId>>;

    /// Ids of all tags the viewer follows
    async fn followed_tag_ids(&self, viewer_id: UserId) -> RepoResult<HashSet<TagId>>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Candidate-id lookups and bulk post reads
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Ids of posts authored by any of the given users, newest first,
    /// with limit/offset applied in the query
    async fn ids_by_authors(
        &self,
        author_ids: &[UserId],
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<PostId>>;

    /// Ids of posts carrying any of the given tags, newest first,
    /// with limit/offset applied in the query
    async fn ids_by_tags(
        &self,
        tag_ids: &[TagId],
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<PostId>>;

    /// Bulk-fetch posts by id; ids with no live post are absent from the map
    async fn posts_by_ids(&self, ids: &[PostId]) -> RepoResult<HashMap<PostId, Post>>;
}

// ============================================================================
// Bulk Readers
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Bulk-fetch users by id
    async fn users_by_ids(&self, ids: &[UserId]) -> RepoResult<HashMap<UserId, User>>;
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Bulk-fetch items by id
    async fn items_by_ids(&self, ids: &[ItemId]) -> RepoResult<HashMap<ItemId, Item>>;
}

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Bulk-fetch photos by id
    async fn photos_by_ids(&self, ids: &[PhotoId]) -> RepoResult<HashMap<PhotoId, Photo>>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Tags attached to each of the given posts; posts without tags may be
    /// absent from the map
    async fn tags_by_post_ids(&self, post_ids: &[PostId])
        -> RepoResult<HashMap<PostId, Vec<Tag>>>;
}

// ============================================================================
// Engagement Repository
// ============================================================================

/// Like and comment counts, batch-keyed by post id
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Like counts per post; posts with zero likes may be absent
    async fn like_counts(&self, post_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>>;

    /// Comment counts per post; posts with zero comments may be absent
    async fn comment_counts(&self, post_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>>;
}
