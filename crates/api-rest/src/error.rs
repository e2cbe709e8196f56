//! Mapping from service failures to HTTP error responses.
//!
//! Every error is rendered as `{"detail": "..."}` with the status below. Nothing is retried.

use api_shared::ErrorRes;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use news_core::NewsError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The process was started without an upstream API key.
    #[error("API key not configured.")]
    MissingApiKey,
    #[error("Query parameter 'q' cannot be empty.")]
    EmptyQuery,
    /// The query string could not be deserialised (for example `pageSize=abc`).
    #[error("{0}")]
    InvalidQuery(String),
    /// The upstream answered with a non-2xx status; its status and body are forwarded verbatim.
    #[error("{body}")]
    Upstream { status: u16, body: String },
    #[error("Upstream news API timed out.")]
    UpstreamTimeout,
    #[error("Upstream news API is unreachable.")]
    UpstreamUnavailable,
    #[error("Upstream news API returned an unreadable payload.")]
    InvalidUpstreamPayload,
    #[error("Internal error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::EmptyQuery | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::UpstreamUnavailable | ApiError::InvalidUpstreamPayload => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::Timeout(e) => {
                tracing::error!("Upstream timeout: {:?}", e);
                ApiError::UpstreamTimeout
            }
            NewsError::Transport(e) => {
                tracing::error!("Upstream transport error: {:?}", e);
                ApiError::UpstreamUnavailable
            }
            NewsError::InvalidPayload(e) => {
                tracing::error!("Invalid upstream payload: {:?}", e);
                ApiError::InvalidUpstreamPayload
            }
            other => {
                tracing::error!("News service error: {:?}", other);
                ApiError::Internal
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorRes {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
