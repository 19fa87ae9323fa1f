//! PostgreSQL implementation of ItemRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::Item;
use feed_core::traits::{ItemRepository, RepoResult};
use feed_core::value_objects::ItemId;

use crate::models::ItemRow;

use super::error::map_db_error;

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new PgItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self, ids), fields(items = ids.len()))]
    async fn items_by_ids(&self, ids: &[ItemId]) -> RepoResult<HashMap<ItemId, Item>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, default_photo_id
            FROM items
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
                let item = Item::from(row);
                (item.id, item)
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
        assert_send_sync::<PgItemRepository>();
    }
}
