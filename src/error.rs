use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Every way a signup or login request can fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid role")]
    InvalidRole,
    #[error("Invalid input")]
    InvalidInput,
    #[error("Missing driver details")]
    MissingDriverDetails,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentialsFormat,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRole
            | AppError::InvalidInput
            | AppError::MissingDriverDetails
            | AppError::InvalidCredentialsFormat => StatusCode::BAD_REQUEST,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(e) = &self {
            error!(error = ?e, "internal error");
        }
        // Display of Internal is the generic message, never the cause.
        let body = Json(json!({ "message": self.to_string() }));
        (self.status(), body).into_response()
    }
}
