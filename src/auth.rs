//! Shared-secret authentication for the `/api` routes.

use crate::error::ApiError;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "x-api-key";

/// The secret every `/api` request must present.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        &*self.0 == candidate
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Missing header -> 401, wrong value -> 403.
///
/// A header that is not valid visible ASCII cannot equal the key and counts as wrong.
pub fn check_api_key(headers: &HeaderMap, expected: &ApiKey) -> Result<(), ApiError> {
    let Some(provided) = headers.get(API_KEY_HEADER) else {
        tracing::info!("No API key provided");
        return Err(ApiError::MissingApiKey);
    };

    match provided.to_str() {
        Ok(value) if expected.matches(value) => Ok(()),
        _ => {
            tracing::info!("Invalid API key");
            Err(ApiError::InvalidApiKey)
        }
    }
}

pub async fn require_api_key(
    State(expected): State<ApiKey>,
    request: Request,
    next: Next,
) -> Response {
    match check_api_key(request.headers(), &expected) {
        Ok(()) => next.run(request).await,
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn headers_with(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_missing_key_is_unauthorized() {
        let err = check_api_key(&headers_with(None), &ApiKey::new("secret")).unwrap_err();

        assert!(matches!(err, ApiError::MissingApiKey));
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_wrong_key_is_forbidden() {
        let err = check_api_key(&headers_with(Some("guess")), &ApiKey::new("secret")).unwrap_err();

        assert!(matches!(err, ApiError::InvalidApiKey));
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_empty_header_is_forbidden_not_missing() {
        let err = check_api_key(&headers_with(Some("")), &ApiKey::new("secret")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidApiKey));
    }

    #[test]
    fn test_correct_key_passes() {
        assert!(check_api_key(&headers_with(Some("secret")), &ApiKey::new("secret")).is_ok());
    }

    #[test]
    fn test_key_comparison_is_case_sensitive() {
        assert!(check_api_key(&headers_with(Some("SECRET")), &ApiKey::new("secret")).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", ApiKey::new("secret"));
        assert!(!rendered.contains("secret"));
    }
}
