//! PostgreSQL implementation of RelationshipRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::traits::{RelationshipRepository, RepoResult};
use feed_core::value_objects::{TagId, UserId};

use super::error::map_db_error;

/// PostgreSQL implementation of RelationshipRepository
#[derive(Clone)]
pub struct PgRelationshipRepository {
    pool: PgPool,
}

impl PgRelationshipRepository {
    /// Create a new PgRelationshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationshipRepository for PgRelationshipRepository {
    #[instrument(skip(self))]
    async fn followed_user_ids(&self, viewer_id: UserId) -> RepoResult<HashSet<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT followee_id
            FROM follows
            WHERE follower_id = $1
            "#,
        )
        .bind(viewer_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }

    #[instrument(skip(self))]
    async fn followed_tag_ids(&self, viewer_id: UserId) -> RepoResult<HashSet<TagId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT tag_id
            FROM tag_follows
            WHERE follower_id = $1
            "#,
        )
        .bind(viewer_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(TagId::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgRelationshipRepository>();
    }
}
