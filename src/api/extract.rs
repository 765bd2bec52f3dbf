use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use super::ApiError;
use crate::utils;

/// Access token taken from an `Authorization: Bearer <token>` header.
///
/// Rejects with [`ApiError::MissingToken`] before the handler runs, so no
/// upstream request is made without a token.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(utils::bearer_token)
            .map(|token| BearerToken(token.to_string()))
            .ok_or(ApiError::MissingToken)
    }
}
