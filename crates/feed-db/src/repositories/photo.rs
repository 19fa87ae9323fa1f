//! PostgreSQL implementation of PhotoRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::Photo;
use feed_core::traits::{PhotoRepository, RepoResult};
use feed_core::value_objects::PhotoId;

use crate::models::PhotoRow;

use super::error::map_db_error;

/// PostgreSQL implementation of PhotoRepository
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    /// Create a new PgPhotoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    #[instrument(skip(self, ids), fields(photos = ids.len()))]
    async fn photos_by_ids(&self, ids: &[PhotoId]) -> RepoResult<HashMap<PhotoId, Photo>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, url
            FROM photos
            WHERE id = ANY($1)
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let photo = Photo::from(row);
                (photo.id, photo)
            })
            .collect())
    }
}
