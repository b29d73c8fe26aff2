//! Pet request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use petconnect_core::models::pet::{NewPet, PetFilter};
use petconnect_core::models::user::UserRole;
use petconnect_core::pets;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{CreatePetRequest, PetListQuery, PetResponse};

/// `GET /api/pets` — public browse with optional filters.
pub async fn list_pets_handler(
    State(state): State<AppState>,
    Query(query): Query<PetListQuery>,
) -> ApiResult<Json<Vec<PetResponse>>> {
    let filter = PetFilter {
        species: query.species,
        size: query.size,
        energy: query.energy,
        location: query.location,
    };
    let rows = pets::list_pets(&state.pool, &filter).await?;
    Ok(Json(rows.into_iter().map(PetResponse::from).collect()))
}

/// `GET /api/pets/{id}` — public pet detail.
pub async fn get_pet_handler(
    State(state): State<AppState>,
    Path(pet_id): Path<String>,
) -> ApiResult<Json<PetResponse>> {
    let pet_id = super::parse_id(&pet_id, "Pet id")?;
    let row = pets::get_pet(&state.pool, pet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Pet not found".into()))?;
    Ok(Json(PetResponse::from(row)))
}

/// `POST /api/pets` — create a listing. Shelter role only.
pub async fn create_pet_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<CreatePetRequest>,
) -> ApiResult<(StatusCode, Json<PetResponse>)> {
    user.require_role(UserRole::Shelter)?;

    let (Some(name), Some(species)) = (
        body.name.filter(|n| !n.is_empty()),
        body.species.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::Validation("Name and species are required".into()));
    };

    let pet = NewPet {
        name,
        species,
        breed: body.breed,
        age: body.age,
        size: body.size,
        gender: body.gender,
        color: body.color,
        energy: body.energy,
        good_with_kids: body.good_with_kids.unwrap_or(false),
        good_with_pets: body.good_with_pets.unwrap_or(false),
        description: body.description,
        traits: body.traits.unwrap_or_default(),
        location: body.location,
        // Shelter display name defaults to the caller's name.
        shelter: body.shelter.or_else(|| Some(user.0.name.clone())),
        image: body.image,
        images: body.images.unwrap_or_default(),
    };

    let row = pets::create_pet(&state.pool, user.0.sub, pet).await?;
    Ok((StatusCode::CREATED, Json(PetResponse::from(row))))
}
