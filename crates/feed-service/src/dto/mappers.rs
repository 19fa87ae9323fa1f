//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain values to response DTOs.

use feed_core::entities::{AuthorSummary, FeedEntry, ItemSummary, TagSummary};

use super::responses::{
    AuthorSummaryResponse, FeedEntryResponse, FeedResponse, ItemSummaryResponse,
    TagSummaryResponse,
};

impl From<&AuthorSummary> for AuthorSummaryResponse {
    fn from(author: &AuthorSummary) -> Self {
        Self {
            id: author.id,
            username: author.username.clone(),
            avatar_url: author.avatar_url.clone(),
        }
    }
}

impl From<&ItemSummary> for ItemSummaryResponse {
    fn from(item: &ItemSummary) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
        }
    }
}

impl From<&TagSummary> for TagSummaryResponse {
    fn from(tag: &TagSummary) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}

impl From<&FeedEntry> for FeedEntryResponse {
    fn from(entry: &FeedEntry) -> Self {
        Self {
            id: entry.post_id,
            content: entry.content.clone(),
            created_at: entry.created_at,
            author: AuthorSummaryResponse::from(&entry.author),
            item: ItemSummaryResponse::from(&entry.item),
            like_count: entry.like_count,
            comment_count: entry.comment_count,
            tags: entry.tags.iter().map(TagSummaryResponse::from).collect(),
        }
    }
}

impl From<FeedEntry> for FeedEntryResponse {
    fn from(entry: FeedEntry) -> Self {
        Self::from(&entry)
    }
}

impl From<Vec<FeedEntry>> for FeedResponse {
    fn from(entries: Vec<FeedEntry>) -> Self {
        Self {
            posts: entries.into_iter().map(FeedEntryResponse::from).collect(),
        }
    }
}
