//! Post entity - a short text update attached to an item

use chrono::{DateTime, Utc};

use crate::value_objects::{ItemId, PostId, UserId};

/// Post entity
///
/// The creation timestamp is immutable and drives all feed ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub item_id: ItemId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Maximum post content length in characters
    pub const MAX_CONTENT_CHARS: usize = 280;

    /// Create a new Post
    pub fn new(id: PostId, author_id: UserId, item_id: ItemId, content: String) -> Self {
        Self {
            id,
            author_id,
            item_id,
            content,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Check if the post has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Check whether the content satisfies the domain constraints
    /// (non-empty, at most [`Self::MAX_CONTENT_CHARS`] characters)
    pub fn has_valid_content(&self) -> bool {
        let trimmed = self.content.trim();
        !trimmed.is_empty() && self.content.chars().count() <= Self::MAX_CONTENT_CHARS
    }

    /// Get a truncated preview of the content (for notifications)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_content(content: &str) -> Post {
        Post::new(
            PostId::new(1),
            UserId::new(10),
            ItemId::new(100),
            content.to_string(),
        )
    }

    #[test]
    fn test_post_creation() {
        let post = post_with_content("first!");
        assert!(!post.is_edited());
        assert!(post.has_valid_content());
    }

    #[test]
    fn test_content_validation() {
        assert!(!post_with_content("").has_valid_content());
        assert!(!post_with_content("   ").has_valid_content());

        let long = "x".repeat(Post::MAX_CONTENT_CHARS + 1);
        assert!(!post_with_content(&long).has_valid_content());

        let max = "x".repeat(Post::MAX_CONTENT_CHARS);
        assert!(post_with_content(&max).has_valid_content());
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let post = post_with_content("héllo wörld");
        // 2 bytes into the middle of 'é'
        assert_eq!(post.preview(2), "h");
        assert_eq!(post.preview(100), "héllo wörld");
    }
}
