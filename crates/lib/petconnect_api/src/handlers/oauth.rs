//! Google OAuth request handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, GoogleAuthRequest};
use crate::services::{auth, google};

/// `POST /api/auth/google` — exchange an authorization code for a session.
///
/// 201 when a new adopter account was created for the verified email,
/// 200 when the email already had an account.
pub async fn google_handler(
    State(state): State<AppState>,
    Json(body): Json<GoogleAuthRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let code = body
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::Validation("Missing authorization code".into()))?;

    let profile = google::exchange_code(&state.config.google, code).await?;
    let (resp, created) =
        auth::google_login(&state.pool, &profile, state.config.jwt_secret.as_bytes()).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(resp)))
}
