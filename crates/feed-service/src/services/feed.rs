//! Feed aggregation service
//!
//! Two independent feed sources (followed users, followed tags) and the
//! combined feed that merges, deduplicates, sorts, and paginates them.

use std::collections::HashSet;

use tracing::instrument;

use feed_core::entities::FeedEntry;
use feed_core::value_objects::{TagId, UserId};

use super::context::ServiceContext;
use super::enrichment::PostEnricher;
use super::error::ServiceResult;

/// Feed aggregation service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Feed of posts authored by users the viewer follows, newest first.
    ///
    /// A viewer following nobody gets an empty feed without any post query
    /// being issued.
    #[instrument(skip(self))]
    pub async fn users_feed(
        &self,
        viewer_id: UserId,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<FeedEntry>> {
        let (limit, offset) = (limit.max(0), offset.max(0));

        let followed = self
            .ctx
            .relationship_repo()
            .followed_user_ids(viewer_id)
            .await?;
        if followed.is_empty() {
            return Ok(Vec::new());
        }

        let mut author_ids: Vec<UserId> = followed.into_iter().collect();
        author_ids.sort_unstable();

        let candidate_ids = self
            .ctx
            .post_repo()
            .ids_by_authors(&author_ids, limit, offset)
            .await?;

        PostEnricher::new(self.ctx).enrich(&candidate_ids).await
    }

    /// Feed of posts carrying tags the viewer follows, newest first.
    ///
    /// Same shape as [`Self::users_feed`], driven by the tag-post
    /// association; an empty followed-tag set short-circuits likewise.
    #[instrument(skip(self))]
    pub async fn tags_feed(
        &self,
        viewer_id: UserId,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<FeedEntry>> {
        let (limit, offset) = (limit.max(0), offset.max(0));

        let followed = self
            .ctx
            .relationship_repo()
            .followed_tag_ids(viewer_id)
            .await?;
        if followed.is_empty() {
            return Ok(Vec::new());
        }

        let mut tag_ids: Vec<TagId> = followed.into_iter().collect();
        tag_ids.sort_unstable();

        let candidate_ids = self
            .ctx
            .post_repo()
            .ids_by_tags(&tag_ids, limit, offset)
            .await?;

        PostEnricher::new(self.ctx).enrich(&candidate_ids).await
    }

    /// Unified feed merging both sources, deduplicated and newest first.
    ///
    /// Each source is over-fetched with `source_fetch_window` entries from
    /// offset 0, whatever page the caller asked for, so dedup and re-sort
    /// have enough candidates when the sources overlap. The caller's
    /// `offset`/`limit` slice the merged, sorted set; an offset past the
    /// end yields an empty page.
    #[instrument(skip(self))]
    pub async fn combined_feed(
        &self,
        viewer_id: UserId,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<FeedEntry>> {
        let (limit, offset) = (limit.max(0), offset.max(0));
        let window = self.ctx.feed_config().source_fetch_window;

        let (from_users, from_tags) = tokio::try_join!(
            self.users_feed(viewer_id, window, 0),
            self.tags_feed(viewer_id, window, 0),
        )?;

        Ok(merge_entries(from_users, from_tags, limit, offset))
    }
}

/// Merge the two source lists: users-source entries first, first
/// occurrence wins on duplicate post ids, stable sort by creation time
/// descending, then slice `[offset, offset + limit)`.
fn merge_entries(
    from_users: Vec<FeedEntry>,
    from_tags: Vec<FeedEntry>,
    limit: i64,
    offset: i64,
) -> Vec<FeedEntry> {
    let mut seen = HashSet::with_capacity(from_users.len() + from_tags.len());
    let mut merged: Vec<FeedEntry> = Vec::with_capacity(from_users.len() + from_tags.len());

    for entry in from_users.into_iter().chain(from_tags) {
        if seen.insert(entry.post_id) {
            merged.push(entry);
        }
    }

    // Stable sort: entries with equal timestamps keep source order.
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    merged
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use feed_core::entities::{AuthorSummary, ItemSummary};
    use feed_core::value_objects::{ItemId, PostId};

    fn entry(id: i64, seconds_ago: i64) -> FeedEntry {
        FeedEntry {
            post_id: PostId::new(id),
            content: format!("post {id}"),
            created_at: Utc::now() - Duration::seconds(seconds_ago),
            author: AuthorSummary {
                id: UserId::new(1),
                username: "author".to_string(),
                avatar_url: None,
            },
            item: ItemSummary {
                id: ItemId::new(1),
                name: "item".to_string(),
                image_url: None,
            },
            like_count: 0,
            comment_count: 0,
            tags: Vec::new(),
        }
    }

    fn ids(entries: &[FeedEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.post_id.into_inner()).collect()
    }

    #[test]
    fn test_merge_sorts_newest_first() {
        let merged = merge_entries(
            vec![entry(1, 30), entry(2, 10)],
            vec![entry(3, 20)],
            10,
            0,
        );
        assert_eq!(ids(&merged), vec![2, 3, 1]);
    }

    #[test]
    fn test_merge_dedups_first_occurrence() {
        let users_copy = entry(1, 10);
        let mut tags_copy = entry(1, 10);
        tags_copy.content = "tag source copy".to_string();

        let merged = merge_entries(vec![users_copy.clone()], vec![tags_copy], 10, 0);
        assert_eq!(merged.len(), 1);
        // users-source entries come first, so that copy wins
        assert_eq!(merged[0].content, users_copy.content);
    }

    #[test]
    fn test_merge_slices_with_offset_and_limit() {
        let entries: Vec<FeedEntry> = (0..5).map(|i| entry(i, i * 10)).collect();
        let merged = merge_entries(entries, Vec::new(), 2, 1);
        assert_eq!(ids(&merged), vec![1, 2]);
    }

    #[test]
    fn test_merge_offset_past_end_is_empty() {
        let merged = merge_entries(vec![entry(1, 0)], vec![entry(2, 10)], 10, 50);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_empty_sources() {
        let merged = merge_entries(Vec::new(), Vec::new(), 20, 0);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_equal_timestamps_keep_source_order() {
        let ts = Utc::now();
        let mut a = entry(1, 0);
        a.created_at = ts;
        let mut b = entry(2, 0);
        b.created_at = ts;

        let merged = merge_entries(vec![a], vec![b], 10, 0);
        assert_eq!(ids(&merged), vec![1, 2]);
    }
}
