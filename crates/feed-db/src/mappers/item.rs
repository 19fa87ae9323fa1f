//! Item and photo row → entity mappers

use feed_core::entities::{Item, Photo};
use feed_core::value_objects::{ItemId, PhotoId};

use crate::models::{ItemRow, PhotoRow};

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            name: row.name,
            default_photo_id: row.default_photo_id.map(PhotoId::new),
        }
    }
}

impl From<PhotoRow> for Photo {
    fn from(row: PhotoRow) -> Self {
        Photo {
            id: PhotoId::new(row.id),
            url: row.url,
        }
    }
}
