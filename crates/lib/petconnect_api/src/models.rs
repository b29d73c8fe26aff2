//! API request and response models.
//!
//! Wire field names are camelCase. Request bodies use optional fields and
//! are validated explicitly in the handlers/services so that missing
//! fields produce a 400 with a readable message instead of a
//! deserialization rejection. Unknown fields — including client attempts
//! to supply `status`, `submittedDate` or `shelterId` — are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use petconnect_core::models::application::{ApplicationRow, ApplicationStatus, ApplicationWithPet};
use petconnect_core::models::pet::PetRow;
use petconnect_core::models::user::User;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleAuthRequest {
    pub code: Option<String>,
}

/// `{user, token}` pair returned by register, login and Google sign-in.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
}

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

/// Browse filters accepted by `GET /api/pets`.
#[derive(Debug, Default, Deserialize)]
pub struct PetListQuery {
    pub species: Option<String>,
    pub size: Option<String>,
    pub energy: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub energy: Option<String>,
    pub good_with_kids: Option<bool>,
    pub good_with_pets: Option<bool>,
    pub description: Option<String>,
    pub traits: Option<Vec<String>>,
    pub location: Option<String>,
    pub shelter: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub id: Uuid,
    pub shelter_id: Uuid,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub energy: Option<String>,
    pub good_with_kids: bool,
    pub good_with_pets: bool,
    pub description: Option<String>,
    pub traits: Vec<String>,
    pub location: Option<String>,
    pub shelter: Option<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
}

impl From<PetRow> for PetResponse {
    fn from(row: PetRow) -> Self {
        Self {
            id: row.id,
            shelter_id: row.shelter_id,
            name: row.name,
            species: row.species,
            breed: row.breed,
            age: row.age,
            size: row.size,
            gender: row.gender,
            color: row.color,
            energy: row.energy,
            good_with_kids: row.good_with_kids,
            good_with_pets: row.good_with_pets,
            description: row.description,
            traits: row.traits.0,
            location: row.location,
            shelter: row.shelter,
            image: row.image,
            images: row.images.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    /// Pet ID as a string so that an absent or malformed value yields a
    /// 400 instead of a body rejection.
    pub pet_id: Option<String>,
    pub applicant_name: Option<String>,
    pub applicant_email: Option<String>,
    pub applicant_phone: Option<String>,
    pub home_type: Option<String>,
    pub has_yard: Option<bool>,
    pub has_pets: Option<bool>,
    pub experience: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub pet_id: Uuid,
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: Option<String>,
    pub home_type: Option<String>,
    pub has_yard: bool,
    pub has_pets: bool,
    pub experience: Option<String>,
    pub reason: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_date: DateTime<Utc>,
    pub shelter_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_image: Option<String>,
}

impl From<ApplicationRow> for ApplicationResponse {
    fn from(row: ApplicationRow) -> Self {
        Self {
            id: row.id,
            pet_id: row.pet_id,
            applicant_id: row.applicant_id,
            applicant_name: row.applicant_name,
            applicant_email: row.applicant_email,
            applicant_phone: row.applicant_phone,
            home_type: row.home_type,
            has_yard: row.has_yard,
            has_pets: row.has_pets,
            experience: row.experience,
            reason: row.reason,
            status: row.status,
            submitted_date: row.submitted_date,
            shelter_id: row.shelter_id,
            pet_name: None,
            pet_image: None,
        }
    }
}

impl From<ApplicationWithPet> for ApplicationResponse {
    fn from(row: ApplicationWithPet) -> Self {
        let mut resp = ApplicationResponse::from(row.application);
        resp.pet_name = Some(row.pet_name);
        resp.pet_image = row.pet_image;
        resp
    }
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub pet_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
