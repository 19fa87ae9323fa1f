//! Repository traits (ports)

mod repositories;

pub use repositories::{
    EngagementRepository, ItemRepository, PhotoRepository, PostRepository,
    RelationshipRepository, RepoResult, TagRepository, UserRepository,
};
