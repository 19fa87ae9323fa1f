//! FeedEntry - the display-ready representation of one post within a feed
//!
//! A FeedEntry is computed fresh on every request from live post,
//! relationship, and enrichment data. It is never persisted.

use chrono::{DateTime, Utc};

use crate::entities::{Item, Post, Tag, User};
use crate::value_objects::{ItemId, PostId, TagId, UserId};

/// Embedded author summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Embedded item summary with its resolved image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub image_url: Option<String>,
}

/// Embedded tag summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub id: TagId,
    pub name: String,
}

impl From<&Tag> for TagSummary {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}

/// One fully enriched feed entry
///
/// Identity is the post id: two entries with the same `post_id` are the
/// same entry for deduplication purposes, regardless of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub post_id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorSummary,
    pub item: ItemSummary,
    pub like_count: i64,
    pub comment_count: i64,
    pub tags: Vec<TagSummary>,
}

impl FeedEntry {
    /// Assemble an entry from a post and its looked-up enrichment data.
    ///
    /// Returns `None` when the entry cannot be built: missing author or
    /// item row, or content that fails validation. Callers skip such
    /// entries instead of failing the feed.
    pub fn assemble(
        post: &Post,
        author: Option<&User>,
        item: Option<&Item>,
        image_url: Option<String>,
        like_count: i64,
        comment_count: i64,
        tags: &[Tag],
    ) -> Option<Self> {
        if !post.has_valid_content() {
            return None;
        }
        let author = author?;
        let item = item?;

        Some(Self {
            post_id: post.id,
            content: post.content.clone(),
            created_at: post.created_at,
            author: AuthorSummary::from(author),
            item: ItemSummary {
                id: item.id,
                name: item.name.clone(),
                image_url,
            },
            like_count: like_count.max(0),
            comment_count: comment_count.max(0),
            tags: tags.iter().map(TagSummary::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post::new(
            PostId::new(1),
            UserId::new(10),
            ItemId::new(100),
            "a fine post".to_string(),
        )
    }

    fn sample_author() -> User {
        User::new(UserId::new(10), "alice".to_string())
    }

    fn sample_item() -> Item {
        Item::new(ItemId::new(100), "camera".to_string())
    }

    #[test]
    fn test_assemble_complete_entry() {
        let post = sample_post();
        let author = sample_author();
        let item = sample_item();
        let tags = vec![Tag::new(TagId::new(5), "photography".to_string())];

        let entry = FeedEntry::assemble(
            &post,
            Some(&author),
            Some(&item),
            Some("https://cdn.example/p/1.jpg".to_string()),
            3,
            2,
            &tags,
        )
        .unwrap();

        assert_eq!(entry.post_id, post.id);
        assert_eq!(entry.author.username, "alice");
        assert_eq!(entry.item.image_url.as_deref(), Some("https://cdn.example/p/1.jpg"));
        assert_eq!(entry.like_count, 3);
        assert_eq!(entry.tags.len(), 1);
    }

    #[test]
    fn test_assemble_missing_author_is_skip() {
        let post = sample_post();
        let item = sample_item();
        assert!(FeedEntry::assemble(&post, None, Some(&item), None, 0, 0, &[]).is_none());
    }

    #[test]
    fn test_assemble_missing_item_is_skip() {
        let post = sample_post();
        let author = sample_author();
        assert!(FeedEntry::assemble(&post, Some(&author), None, None, 0, 0, &[]).is_none());
    }

    #[test]
    fn test_assemble_invalid_content_is_skip() {
        let mut post = sample_post();
        post.content = String::new();
        let author = sample_author();
        let item = sample_item();
        assert!(FeedEntry::assemble(&post, Some(&author), Some(&item), None, 0, 0, &[]).is_none());
    }

    #[test]
    fn test_assemble_clamps_negative_counts() {
        let post = sample_post();
        let author = sample_author();
        let item = sample_item();
        let entry =
            FeedEntry::assemble(&post, Some(&author), Some(&item), None, -1, -5, &[]).unwrap();
        assert_eq!(entry.like_count, 0);
        assert_eq!(entry.comment_count, 0);
    }

    #[test]
    fn test_entry_without_photo_or_tags() {
        let post = sample_post();
        let author = sample_author();
        let item = sample_item();
        let entry = FeedEntry::assemble(&post, Some(&author), Some(&item), None, 0, 0, &[]).unwrap();
        assert!(entry.item.image_url.is_none());
        assert!(entry.tags.is_empty());
    }
}
