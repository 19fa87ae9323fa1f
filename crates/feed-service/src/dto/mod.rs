//! Data transfer objects for API responses

mod mappers;
mod responses;

pub use responses::{
    AuthorSummaryResponse, FeedEntryResponse, FeedResponse, HealthResponse, ItemSummaryResponse,
    ReadinessResponse, TagSummaryResponse,
};
