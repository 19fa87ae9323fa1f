//! User entity

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity
///
/// Only the fields this subsystem reads; account management lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: UserId, username: String) -> Self {
        Self {
            id,
            username,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the user has an avatar set
    #[inline]
    pub fn has_avatar(&self) -> bool {
        self.avatar_url.is_some()
    }
}
