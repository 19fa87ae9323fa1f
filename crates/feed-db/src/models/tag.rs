//! Tag database models

use sqlx::FromRow;

/// Database model for tags table
#[derive(Debug, Clone, FromRow)]
pub struct TagRow {
    pub id: i64,
    pub name: String,
}

/// Join row for the post↔tag association (tag columns plus the post id)
#[derive(Debug, Clone, FromRow)]
pub struct PostTagRow {
    pub post_id: i64,
    pub tag_id: i64,
    pub name: String,
}
