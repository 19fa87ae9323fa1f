//! Item and Photo entities

use crate::value_objects::{ItemId, PhotoId};

/// Item entity - the object a post is attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Reference to the photo shown as the item's image, if any
    pub default_photo_id: Option<PhotoId>,
}

impl Item {
    /// Create a new Item
    pub fn new(id: ItemId, name: String) -> Self {
        Self {
            id,
            name,
            default_photo_id: None,
        }
    }

    /// Check if the item has a default photo reference
    #[inline]
    pub fn has_default_photo(&self) -> bool {
        self.default_photo_id.is_some()
    }
}

/// Photo entity (separate from Item; items reference photos by id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_without_photo() {
        let item = Item::new(ItemId::new(1), "camera".to_string());
        assert!(!item.has_default_photo());
    }

    #[test]
    fn test_item_with_photo() {
        let mut item = Item::new(ItemId::new(1), "camera".to_string());
        item.default_photo_id = Some(PhotoId::new(7));
        assert!(item.has_default_photo());
    }
}
