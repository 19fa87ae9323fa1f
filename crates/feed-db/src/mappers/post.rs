//! Post row → entity mapper

use feed_core::entities::Post;
use feed_core::value_objects::{ItemId, PostId, UserId};

use crate::models::PostRow;

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: PostId::new(row.id),
            author_id: UserId::new(row.author_id),
            item_id: ItemId::new(row.item_id),
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
