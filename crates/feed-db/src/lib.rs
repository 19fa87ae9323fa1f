//! # feed-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `feed-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Row ↔ entity mappers
//! - Batch-by-id-set repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_db::pool::{create_pool, DatabaseConfig};
//! use feed_db::PgPostRepository;
//! use feed_core::traits::PostRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let post_repo = PgPostRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgEngagementRepository, PgItemRepository, PgPhotoRepository, PgPostRepository,
    PgRelationshipRepository, PgTagRepository, PgUserRepository,
};
