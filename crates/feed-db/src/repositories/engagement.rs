//! PostgreSQL implementation of EngagementRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::traits::{EngagementRepository, RepoResult};
use feed_core::value_objects::PostId;

use super::error::map_db_error;

/// PostgreSQL implementation of EngagementRepository
#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    /// Create a new PgEngagementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn counts(&self, query: &str, post_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i64> = post_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, (i64, i64)>(query)
            .bind(&raw_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(post_id, count)| (PostId::new(post_id), count))
            .collect())
    }
}

#[async_trait]
impl EngagementRepository for PgEngagementRepository {
    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn like_counts(&self, post_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>> {
        self.counts(
            r#"
            SELECT post_id, COUNT(*)
            FROM likes
            WHERE post_id = ANY($1)
            GROUP BY post_id
            "#,
            post_ids,
        )
        .await
    }

    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    async fn comment_counts(&self, post_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>> {
        self.counts(
            r#"
            SELECT post_id, COUNT(*)
            FROM comments
            WHERE post_id = ANY($1) AND deleted_at IS NULL
            GROUP BY post_id
            "#,
            post_ids,
        )
        .await
    }
}
