//! Favorites request handlers. Any authenticated user; always scoped to
//! the caller.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use petconnect_core::{favorites, pets};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{AddFavoriteRequest, OkResponse, PetResponse};

/// `GET /api/favorites` — the caller's favorited pets.
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<PetResponse>>> {
    let rows = favorites::list_favorite_pets(&state.pool, user.0.sub).await?;
    Ok(Json(rows.into_iter().map(PetResponse::from).collect()))
}

/// `POST /api/favorites` — add a favorite. Idempotent: re-adding an
/// existing favorite succeeds without effect.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<AddFavoriteRequest>,
) -> ApiResult<(StatusCode, Json<OkResponse>)> {
    let pet_id = body
        .pet_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("petId is required".into()))?;
    let pet_id = Uuid::parse_str(pet_id)
        .map_err(|_| ApiError::Validation("petId must be a valid UUID".into()))?;

    if pets::get_pet(&state.pool, pet_id).await?.is_none() {
        return Err(ApiError::NotFound("Pet not found".into()));
    }

    favorites::add_favorite(&state.pool, user.0.sub, pet_id).await?;
    Ok((StatusCode::CREATED, Json(OkResponse { ok: true })))
}

/// `DELETE /api/favorites/{petId}` — remove a favorite.
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(pet_id): Path<String>,
) -> ApiResult<Json<OkResponse>> {
    let pet_id = super::parse_id(&pet_id, "petId")?;
    favorites::remove_favorite(&state.pool, user.0.sub, pet_id).await?;
    Ok(Json(OkResponse { ok: true }))
}
