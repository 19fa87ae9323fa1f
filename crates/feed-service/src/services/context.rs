//! Service context - dependency container for services
//!
//! Holds the repository ports and feed configuration needed by the
//! aggregation pipeline. Repositories are injected as trait objects so the
//! pipeline runs identically against PostgreSQL or in-memory fakes.

use std::sync::Arc;

use feed_common::FeedConfig;
use feed_core::traits::{
    EngagementRepository, ItemRepository, PhotoRepository, PostRepository,
    RelationshipRepository, TagRepository, UserRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    relationship_repo: Arc<dyn RelationshipRepository>,
    post_repo: Arc<dyn PostRepository>,
    user_repo: Arc<dyn UserRepository>,
    item_repo: Arc<dyn ItemRepository>,
    photo_repo: Arc<dyn PhotoRepository>,
    tag_repo: Arc<dyn TagRepository>,
    engagement_repo: Arc<dyn EngagementRepository>,

    feed_config: FeedConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        relationship_repo: Arc<dyn RelationshipRepository>,
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        item_repo: Arc<dyn ItemRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        tag_repo: Arc<dyn TagRepository>,
        engagement_repo: Arc<dyn EngagementRepository>,
        feed_config: FeedConfig,
    ) -> Self {
        Self {
            relationship_repo,
            post_repo,
            user_repo,
            item_repo,
            photo_repo,
            tag_repo,
            engagement_repo,
            feed_config,
        }
    }

    /// Get the relationship repository
    pub fn relationship_repo(&self) -> &dyn RelationshipRepository {
        self.relationship_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the item repository
    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    /// Get the photo repository
    pub fn photo_repo(&self) -> &dyn PhotoRepository {
        self.photo_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the engagement repository
    pub fn engagement_repo(&self) -> &dyn EngagementRepository {
        self.engagement_repo.as_ref()
    }

    /// Get the feed configuration
    pub fn feed_config(&self) -> &FeedConfig {
        &self.feed_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("feed_config", &self.feed_config)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    relationship_repo: Option<Arc<dyn RelationshipRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    photo_repo: Option<Arc<dyn PhotoRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    engagement_repo: Option<Arc<dyn EngagementRepository>>,
    feed_config: FeedConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            relationship_repo: None,
            post_repo: None,
            user_repo: None,
            item_repo: None,
            photo_repo: None,
            tag_repo: None,
            engagement_repo: None,
            feed_config: FeedConfig::default(),
        }
    }

    pub fn relationship_repo(mut self, repo: Arc<dyn RelationshipRepository>) -> Self {
        self.relationship_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn photo_repo(mut self, repo: Arc<dyn PhotoRepository>) -> Self {
        self.photo_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn engagement_repo(mut self, repo: Arc<dyn EngagementRepository>) -> Self {
        self.engagement_repo = Some(repo);
        self
    }

    pub fn feed_config(mut self, config: FeedConfig) -> Self {
        self.feed_config = config;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.relationship_repo
                .ok_or_else(|| ServiceError::validation("relationship_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.item_repo
                .ok_or_else(|| ServiceError::validation("item_repo is required"))?,
            self.photo_repo
                .ok_or_else(|| ServiceError::validation("photo_repo is required"))?,
            self.tag_repo
                .ok_or_else(|| ServiceError::validation("tag_repo is required"))?,
            self.engagement_repo
                .ok_or_else(|| ServiceError::validation("engagement_repo is required"))?,
            self.feed_config,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
