//! Adoption application request handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use petconnect_core::applications;
use petconnect_core::models::application::{ApplicationStatus, NewApplication};
use petconnect_core::models::user::UserRole;
use petconnect_core::pets;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{ApplicationResponse, SubmitApplicationRequest, UpdateStatusRequest};

/// `POST /api/applications` — submit an application. Adopter role only.
///
/// The owning shelter is read from the pet row, never from the request;
/// status and submission time are forced server-side.
pub async fn submit_application_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Json(body): Json<SubmitApplicationRequest>,
) -> ApiResult<(StatusCode, Json<ApplicationResponse>)> {
    user.require_role(UserRole::Adopter)?;

    let pet_id = body
        .pet_id
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation("petId is required".into()))?;
    let pet_id = Uuid::parse_str(pet_id)
        .map_err(|_| ApiError::Validation("petId must be a valid UUID".into()))?;

    let pet = pets::get_pet(&state.pool, pet_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Pet not found".into()))?;

    let application = NewApplication {
        pet_id,
        applicant_id: user.0.sub,
        // Contact fields default from the caller's verified identity.
        applicant_name: body.applicant_name.unwrap_or_else(|| user.0.name.clone()),
        applicant_email: body
            .applicant_email
            .unwrap_or_else(|| user.0.email.clone()),
        applicant_phone: body.applicant_phone,
        home_type: body.home_type,
        has_yard: body.has_yard.unwrap_or(false),
        has_pets: body.has_pets.unwrap_or(false),
        experience: body.experience,
        reason: body.reason,
    };

    let row = applications::create_application(&state.pool, application, pet.shelter_id).await?;
    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(row))))
}

/// `GET /api/applications` — list, scoped by the caller's role: adopters
/// see their own submissions, shelters see everything routed to them.
pub async fn list_applications_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
) -> ApiResult<Json<Vec<ApplicationResponse>>> {
    let rows = match user.0.role {
        UserRole::Adopter => applications::list_for_applicant(&state.pool, user.0.sub).await?,
        UserRole::Shelter => applications::list_for_shelter(&state.pool, user.0.sub).await?,
    };
    Ok(Json(
        rows.into_iter().map(ApplicationResponse::from).collect(),
    ))
}

/// `PATCH /api/applications/{id}/status` — transition an application.
/// Shelter role only; the row must belong to the calling shelter, and the
/// requested status must follow the workflow.
pub async fn update_status_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<AuthenticatedUser>,
    Path(application_id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> ApiResult<Json<ApplicationResponse>> {
    user.require_role(UserRole::Shelter)?;
    let application_id = super::parse_id(&application_id, "Application id")?;

    let requested = body
        .status
        .as_deref()
        .and_then(ApplicationStatus::parse)
        .ok_or_else(|| ApiError::Validation("Invalid status".into()))?;

    // Scoped fetch: a row owned by another shelter reads as absent.
    let current = applications::get_for_shelter(&state.pool, application_id, user.0.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("Application not found".into()))?;

    if !current.status.can_transition_to(requested) {
        return Err(ApiError::Validation(format!(
            "Cannot change status from {} to {}",
            current.status.as_str(),
            requested.as_str()
        )));
    }

    // Compare-and-swap against the status we validated. A concurrent
    // update that moved the row first shows up as a zero-row update, so
    // we re-read and report the edge that actually failed.
    match applications::set_status(
        &state.pool,
        application_id,
        user.0.sub,
        current.status,
        requested,
    )
    .await?
    {
        Some(row) => Ok(Json(ApplicationResponse::from(row))),
        None => {
            let now = applications::get_for_shelter(&state.pool, application_id, user.0.sub)
                .await?
                .ok_or_else(|| ApiError::NotFound("Application not found".into()))?;
            Err(ApiError::Validation(format!(
                "Cannot change status from {} to {}",
                now.status.as_str(),
                requested.as_str()
            )))
        }
    }
}
