use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{errors, warning};

/// Failure of a single request, rendered as a plain text response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No code found in query.")]
    MissingCode,

    #[error("No access token.")]
    MissingToken,

    #[error("{0}")]
    Upstream(&'static str),
}

impl ApiError {
    /// Logs what Spotify returned and keeps only `message` for the caller.
    pub fn upstream(message: &'static str) -> impl FnOnce(errors::Error) -> ApiError {
        move |err| {
            warning!("{} {}", message, err);
            ApiError::Upstream(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCode => StatusCode::BAD_REQUEST,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
