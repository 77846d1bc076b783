//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::resolver::ResolverError;

/// Error response body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid request parameter
    BadRequest(String),
    /// Name or resource not found
    NotFound(String),
    /// Well-formed input that is not what the endpoint understands
    Unprocessable(String),
    /// Upstream service answered with an error status
    BadGateway(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Unprocessable(msg)
            | AppError::BadGateway(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ResolverError> for AppError {
    fn from(err: ResolverError) -> Self {
        match err {
            ResolverError::NotFound(name) => {
                AppError::NotFound(format!("Could not resolve \"{}\"", name))
            }
            ResolverError::UpstreamStatus(_) => {
                AppError::BadGateway("Sesame service unavailable".to_string())
            }
            ResolverError::Transport(e) => {
                error!(error = %e, "Sesame proxy error");
                AppError::Internal("Failed to contact Sesame service".to_string())
            }
        }
    }
}
