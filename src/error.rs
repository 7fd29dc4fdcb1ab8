use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mygram_auth::{AuthError, REJECTION_MESSAGE};
use mygram_user::UserError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(AuthError),

    #[error("the credential you entered are wrong")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal server error")]
    InternalError(String),
}

/// Body shared by every error and by message-only success responses
#[derive(Debug, Serialize)]
pub struct ResponseMessage {
    pub status: &'static str,
    pub message: String,
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => AppError::InvalidCredentials,
            UserError::EmailAlreadyExists | UserError::UsernameAlreadyExists => {
                AppError::Conflict(err.to_string())
            }
            UserError::NotFound => AppError::NotFound(err.to_string()),
            UserError::ValidationError(msg) => AppError::ValidationError(msg),
            UserError::DatabaseError(e) => AppError::DatabaseError(e),
            UserError::HashingError(e) => AppError::from(e),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        if err.is_rejection() {
            AppError::Unauthenticated(err)
        } else {
            AppError::InternalError(err.to_string())
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(format!(
            "bad payload, enter the valid payload; error: {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, status, message) = match self {
            AppError::Unauthenticated(_) => (
                StatusCode::UNAUTHORIZED,
                "fail",
                REJECTION_MESSAGE.to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "unauthenticated",
                UserError::InvalidCredentials.to_string(),
            ),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "fail", msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "fail", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "fail", msg),
            AppError::DatabaseError(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "fail",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "fail",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status_code, Json(ResponseMessage { status, message })).into_response()
    }
}
