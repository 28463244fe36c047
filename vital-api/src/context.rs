//! Request user context.
//!
//! Every data route is scoped to one user, carried explicitly in the
//! `x-user-id` header as a UUID. The extractor rejects missing or malformed
//! headers before the handler runs, so handlers always hold a valid owner id.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;
use vital_core::UserId;

use crate::error::ApiError;

/// Header carrying the acting user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extracted per-request user context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::missing_user_id)?;

        let user_id = Uuid::parse_str(raw).map_err(|_| ApiError::missing_user_id())?;
        Ok(UserContext { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<UserContext, ApiError> {
        let (mut parts, _) = request.into_parts();
        UserContext::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_header_is_extracted() {
        let user_id = Uuid::now_v7();
        let request = Request::builder()
            .header(USER_ID_HEADER, user_id.to_string())
            .body(())
            .unwrap();

        let ctx = extract(request).await.unwrap();
        assert_eq!(ctx.user_id, user_id);
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let request = Request::builder().body(()).unwrap();
        let err = extract(request).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::MissingUserId);
    }

    #[tokio::test]
    async fn test_malformed_header_is_rejected() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(())
            .unwrap();
        let err = extract(request).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::MissingUserId);
    }
}
