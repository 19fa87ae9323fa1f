//! Item and photo database models

use sqlx::FromRow;

/// Database model for items table
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub default_photo_id: Option<i64>,
}

/// Database model for photos table
#[derive(Debug, Clone, FromRow)]
pub struct PhotoRow {
    pub id: i64,
    pub url: String,
}
