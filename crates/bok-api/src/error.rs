use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use bok_db::StoreError;
use bok_types::api::{self, ErrorResponse};
use bok_types::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("validation error: {}", .0.message())]
    Validation(FieldError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FieldError> for ApiError {
    fn from(e: FieldError) -> Self {
        ApiError::Validation(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Server-side detail never leaves the process.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => api::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody(_) => api::INVALID_BODY,
            ApiError::Validation(field) => field.message(),
            ApiError::Store(_) | ApiError::Internal(_) => api::SOMETHING_WENT_WRONG,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(status = %status.as_u16(), error = %self, "server error");
        } else {
            debug!(status = %status.as_u16(), error = %self, "client error");
        }

        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}
