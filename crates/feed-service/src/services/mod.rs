//! Feed aggregation services
//!
//! This module contains the service layer: the dependency container, the
//! enrichment stage, and the feed source/merge pipeline.

pub mod context;
pub mod enrichment;
pub mod error;
pub mod feed;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use enrichment::PostEnricher;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
