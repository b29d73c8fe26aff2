//! Application error types and their HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account has no local password (Google OAuth only).
    #[error("Wrong auth method")]
    WrongAuthMethod,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Email already in use")]
    EmailInUse,

    #[error("Upstream auth failure: {0}")]
    UpstreamAuth(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            ApiError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing token"),
            ApiError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::WrongAuthMethod => (
                StatusCode::BAD_REQUEST,
                "Use Google sign-in for this account",
            ),
            ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m.as_str()),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            ApiError::EmailInUse => (StatusCode::CONFLICT, "Email already in use"),
            // Upstream and internal details are logged, never returned.
            ApiError::UpstreamAuth(detail) => {
                error!(%detail, "google authentication failed");
                (StatusCode::BAD_GATEWAY, "Google authentication failed")
            }
            ApiError::Internal(detail) => {
                error!(%detail, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        let body = Json(ErrorBody {
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => ApiError::NotFound("Row not found".into()),
            // The only in-scope unique constraint is users.email, so a
            // unique violation surfacing here is a registration race.
            sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::EmailInUse,
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<petconnect_core::auth::AuthError> for ApiError {
    fn from(e: petconnect_core::auth::AuthError) -> Self {
        use petconnect_core::auth::AuthError;
        match e {
            AuthError::CredentialError => ApiError::InvalidCredentials,
            AuthError::TokenError(_) => ApiError::InvalidToken,
            AuthError::DbError(e) => ApiError::from(e),
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}
