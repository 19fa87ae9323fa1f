//! Post enrichment
//!
//! Turns bare candidate post ids into display-ready feed entries by
//! attaching author, item (with resolved image URL), engagement counts,
//! and tags. Every lookup is batch-by-id-set; the independent batches run
//! concurrently and are joined before assembly.

use std::collections::HashSet;

use tracing::{instrument, warn};

use feed_core::entities::FeedEntry;
use feed_core::value_objects::{ItemId, PhotoId, PostId, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post enrichment stage, shared by both feed sources
pub struct PostEnricher<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostEnricher<'a> {
    /// Create a new PostEnricher
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Enrich candidate post ids into feed entries.
    ///
    /// Order-preserving over the input id list. Ids that no longer resolve
    /// to a live post, and rows that fail entry validation, are dropped
    /// rather than failing the request. Repository failures abort the whole
    /// call.
    #[instrument(skip(self, post_ids), fields(candidates = post_ids.len()))]
    pub async fn enrich(&self, post_ids: &[PostId]) -> ServiceResult<Vec<FeedEntry>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let posts = self.ctx.post_repo().posts_by_ids(post_ids).await?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let resolved_ids: Vec<PostId> =
            post_ids.iter().copied().filter(|id| posts.contains_key(id)).collect();

        let author_ids: Vec<UserId> = {
            let unique: HashSet<UserId> = posts.values().map(|p| p.author_id).collect();
            unique.into_iter().collect()
        };
        let item_ids: Vec<ItemId> = {
            let unique: HashSet<ItemId> = posts.values().map(|p| p.item_id).collect();
            unique.into_iter().collect()
        };

        let (users, items, tags, like_counts, comment_counts) = tokio::try_join!(
            self.ctx.user_repo().users_by_ids(&author_ids),
            self.ctx.item_repo().items_by_ids(&item_ids),
            self.ctx.tag_repo().tags_by_post_ids(&resolved_ids),
            self.ctx.engagement_repo().like_counts(&resolved_ids),
            self.ctx.engagement_repo().comment_counts(&resolved_ids),
        )?;

        // Photo resolution depends on the fetched items, so it runs as a
        // second batch.
        let photo_ids: Vec<PhotoId> = {
            let unique: HashSet<PhotoId> =
                items.values().filter_map(|item| item.default_photo_id).collect();
            unique.into_iter().collect()
        };
        let photos = self.ctx.photo_repo().photos_by_ids(&photo_ids).await?;

        let no_tags = Vec::new();
        let mut entries = Vec::with_capacity(resolved_ids.len());
        for post_id in &resolved_ids {
            let Some(post) = posts.get(post_id) else {
                continue;
            };

            let author = users.get(&post.author_id);
            let item = items.get(&post.item_id);
            let image_url = item
                .and_then(|i| i.default_photo_id)
                .and_then(|photo_id| photos.get(&photo_id))
                .map(|photo| photo.url.clone());
            let post_tags = tags.get(post_id).unwrap_or(&no_tags);
            let likes = like_counts.get(post_id).copied().unwrap_or(0);
            let comments = comment_counts.get(post_id).copied().unwrap_or(0);

            match FeedEntry::assemble(post, author, item, image_url, likes, comments, post_tags) {
                Some(entry) => entries.push(entry),
                None => {
                    warn!(post_id = %post_id, "dropping feed entry that failed validation");
                }
            }
        }

        Ok(entries)
    }
}
