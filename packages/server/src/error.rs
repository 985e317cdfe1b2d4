use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::store::StoreError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `INVALID_ID`,
    /// `NOT_FOUND`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "limit must be between 1 and 50")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Request body or query does not have the declared shape or range.
    Validation(String),
    /// Path identifier is not a 24-character hex object id.
    InvalidId(String),
    NotFound(String),
    /// Storage failure. The detail is logged, never returned.
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorBody {
        match self {
            AppError::Validation(msg) => ErrorBody {
                code: "VALIDATION_ERROR",
                message: msg,
            },
            AppError::InvalidId(msg) => ErrorBody {
                code: "INVALID_ID",
                message: msg,
            },
            AppError::NotFound(msg) => ErrorBody {
                code: "NOT_FOUND",
                message: msg,
            },
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorBody {
                    code: "INTERNAL_ERROR",
                    message: "An unexpected error occurred".into(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidDocument(detail) => {
                tracing::warn!("Rejected unstorable document: {detail}");
                AppError::Validation(detail)
            }
            StoreError::Unavailable(detail) => AppError::Internal(detail),
        }
    }
}
