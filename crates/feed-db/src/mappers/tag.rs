//! Tag row → entity mappers

use feed_core::entities::Tag;
use feed_core::value_objects::TagId;

use crate::models::{PostTagRow, TagRow};

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag {
            id: TagId::new(row.id),
            name: row.name,
        }
    }
}

impl From<&PostTagRow> for Tag {
    fn from(row: &PostTagRow) -> Self {
        Tag {
            id: TagId::new(row.tag_id),
            name: row.name.clone(),
        }
    }
}
