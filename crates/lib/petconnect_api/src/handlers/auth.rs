//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use petconnect_core::auth::queries;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{AuthResponse, LoginRequest, MeResponse, RegisterRequest};
use crate::services::auth;

/// `POST /api/auth/register` — create an account with a local password.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let resp = auth::register(&state.pool, &body, state.config.jwt_secret.as_bytes()).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `POST /api/auth/login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let resp = auth::login(&state.pool, &body, state.config.jwt_secret.as_bytes()).await?;
    Ok(Json(resp))
}

/// `GET /api/auth/me` — current user, looked up fresh from the store.
pub async fn me_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<Json<MeResponse>> {
    let row = queries::get_user_by_id(&state.pool, user.0.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(MeResponse { user: row.public() }))
}
