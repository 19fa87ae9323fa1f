//! Viewer identity extractor
//!
//! Authentication happens upstream; the gateway forwards the
//! authenticated user id in a trusted header and this service takes it
//! at face value.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use feed_core::UserId;

use crate::response::ApiError;

/// Header carrying the authenticated user id, set by the upstream gateway
pub const VIEWER_ID_HEADER: &str = "x-user-id";

/// The viewing user, extracted from the trusted identity header
#[derive(Debug, Clone, Copy)]
pub struct Viewer {
    /// Id of the authenticated viewer
    pub user_id: UserId,
}

impl Viewer {
    /// Create a new Viewer
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(VIEWER_ID_HEADER)
            .ok_or(ApiError::MissingViewer)?;

        let raw = value.to_str().map_err(|_| ApiError::InvalidViewer)?;

        let user_id = raw.parse::<UserId>().map_err(|e| {
            tracing::warn!(error = %e, "Malformed viewer id header");
            ApiError::InvalidViewer
        })?;

        Ok(Viewer::new(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<Viewer, ApiError> {
        let (mut parts, ()) = request.into_parts();
        Viewer::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_viewer_id() {
        let request = Request::builder()
            .header(VIEWER_ID_HEADER, "42")
            .body(())
            .unwrap();

        let viewer = extract(request).await.unwrap();
        assert_eq!(viewer.user_id, UserId::new(42));
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingViewer));
    }

    #[tokio::test]
    async fn test_malformed_header_is_bad_request() {
        let request = Request::builder()
            .header(VIEWER_ID_HEADER, "not-a-number")
            .body(())
            .unwrap();

        let err = extract(request).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidViewer));
    }
}
