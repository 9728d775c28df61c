//! HTTP error mapping
//!
//! Every failure leaves the service as a plain-text body with a status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON body")]
    InvalidJson,

    #[error("missing todo id")]
    MissingId,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("404 page not found")]
    PageNotFound,

    #[error(transparent)]
    Core(#[from] todo_core::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::MissingId => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PageNotFound => StatusCode::NOT_FOUND,
            ApiError::Core(todo_core::Error::InvalidTitle) => StatusCode::BAD_REQUEST,
            ApiError::Core(todo_core::Error::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = ?self, "request rejected");
        (status, self.to_string()).into_response()
    }
}
