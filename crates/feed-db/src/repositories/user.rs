//! PostgreSQL implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::User;
use feed_core::traits::{RepoResult, UserRepository};
use feed_core::value_objects::UserId;

use crate::models::UserRow;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, ids), fields(users = ids.len()))]
    async fn users_by_ids(&self, ids: &[UserId]) -> RepoResult<HashMap<UserId, User>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, avatar_url, created_at, deleted_at
            FROM users
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
                let user = User::from(row);
                (user.id, user)
            })
            .collect())
    }
}
