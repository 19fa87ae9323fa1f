//! PostgreSQL repository implementations

mod engagement;
mod error;
mod item;
mod photo;
mod post;
mod relationship;
mod tag;
mod user;

pub use engagement::PgEngagementRepository;
pub use item::PgItemRepository;
pub use photo::PgPhotoRepository;
pub use post::PgPostRepository;
pub use relationship::PgRelationshipRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
