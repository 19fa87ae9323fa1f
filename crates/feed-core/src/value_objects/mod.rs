//! Value objects - typed entity identifiers

mod ids;

pub use ids::{IdParseError, ItemId, PhotoId, PostId, TagId, UserId};
