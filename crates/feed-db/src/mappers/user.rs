//! User row → entity mapper

use feed_core::entities::User;
use feed_core::value_objects::UserId;

use crate::models::UserRow;

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            username: row.username,
            avatar_url: row.avatar_url,
            created_at: row.created_at,
        }
    }
}
