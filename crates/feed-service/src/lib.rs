//! # feed-service
//!
//! Application layer containing the feed aggregation pipeline and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthorSummaryResponse, FeedEntryResponse, FeedResponse, HealthResponse, ItemSummaryResponse,
    ReadinessResponse, TagSummaryResponse,
};
pub use services::{
    FeedService, PostEnricher, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
