//! Page extractor
//!
//! Extracts offset-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 20;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Maximum number of entries to return
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of entries to skip
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Maximum number of entries to return (clamped to 1-100)
    pub limit: i64,
    /// Number of entries to skip (clamped to ≥0)
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Create a page with only a limit
    pub fn with_limit(limit: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: 0,
        }
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page {
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: params.offset.unwrap_or(0).max(0),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Page::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.limit, DEFAULT_LIMIT);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_limit_clamping() {
        let page = Page::with_limit(500);
        assert_eq!(page.limit, MAX_LIMIT);

        let page = Page::with_limit(0);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn test_page_from_params() {
        let page = Page::from(PageParams {
            limit: Some(25),
            offset: Some(40),
        });
        assert_eq!(page.limit, 25);
        assert_eq!(page.offset, 40);
    }

    #[test]
    fn test_negative_offset_clamped_to_zero() {
        let page = Page::from(PageParams {
            limit: None,
            offset: Some(-5),
        });
        assert_eq!(page.offset, 0);
    }
}
