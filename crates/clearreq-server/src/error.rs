use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use clearreq_ingest::IngestError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-level failure, rendered as `{"detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        if err.is_input_error() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::Unprocessable(err.to_string())
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Startup failure.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
