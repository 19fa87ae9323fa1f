//! PostgreSQL implementation of TagRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::Tag;
use feed_core::traits::{RepoResult, TagRepository};
use feed_core::value_objects::PostId;

use crate::models::PostTagRow;

use super::error::map_db_error;

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn tags_by_post_ids(
        &self,
        post_ids: &[PostId],
    ) -> RepoResult<HashMap<PostId, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i64> = post_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, PostTagRow>(
            r#"
            SELECT pt.post_id, t.id AS tag_id, t.name
            FROM post_tags pt
            INNER JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY t.name ASC
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_post: HashMap<PostId, Vec<Tag>> = HashMap::new();
        for row in &rows {
            by_post
                .entry(PostId::new(row.post_id))
                .or_default()
                .push(Tag::from(row));
        }

        Ok(by_post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTagRepository>();
    }
}
