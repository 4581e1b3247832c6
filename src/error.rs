use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("entry store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                "access denied".to_string(),
                Some(msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::StoreUnavailable(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to get statistics".to_string(),
                Some(msg),
            ),
            AppError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database error".to_string(),
                Some(e.to_string()),
            ),
        };

        let body = Json(ApiResponse::<()>::error(error, message));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
