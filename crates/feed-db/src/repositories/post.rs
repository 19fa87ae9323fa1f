//! PostgreSQL implementation of PostRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::Post;
use feed_core::traits::{PostRepository, RepoResult};
use feed_core::value_objects::{PostId, TagId, UserId};

use crate::models::PostRow;

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, author_ids), fields(authors = author_ids.len()))]
    async fn ids_by_authors(
        &self,
        author_ids: &[UserId],
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<PostId>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = author_ids.iter().map(|id| id.into_inner()).collect();

        let post_ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM posts
            WHERE author_id = ANY($1) AND deleted_at IS NULL
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&ids)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(post_ids.into_iter().map(PostId::new).collect())
    }

    #[instrument(skip(self, tag_ids), fields(tags = tag_ids.len()))]
    async fn ids_by_tags(
        &self,
        tag_ids: &[TagId],
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<PostId>> {
        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = tag_ids.iter().map(|id| id.into_inner()).collect();

        // DISTINCT collapses posts carrying more than one followed tag;
        // created_at is selected so the sort is valid under DISTINCT.
        let rows = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            SELECT DISTINCT p.id, p.created_at
            FROM posts p
            INNER JOIN post_tags pt ON pt.post_id = p.id
            WHERE pt.tag_id = ANY($1) AND p.deleted_at IS NULL
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&ids)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|(id, _)| PostId::new(id)).collect())
    }

    #[instrument(skip(self, ids), fields(posts = ids.len()))]
    async fn posts_by_ids(&self, ids: &[PostId]) -> RepoResult<HashMap<PostId, Post>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author_id, item_id, content, created_at, updated_at, deleted_at
            FROM posts
            WHERE id = ANY($1) AND deleted_at IS NULL
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let post = Post::from(row);
                (post.id, post)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }
}
