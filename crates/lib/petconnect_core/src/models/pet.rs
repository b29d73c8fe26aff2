//! Pet domain models.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

/// Pet row as stored. `traits` and `images` live in JSONB columns and
/// surface as native string lists.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PetRow {
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
    pub traits: Json<Vec<String>>,
    pub location: Option<String>,
    /// Shelter display name shown on listings.
    pub shelter: Option<String>,
    pub image: Option<String>,
    pub images: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Filters accepted by the public pet listing. Species, size and energy
/// match exactly; location is a case-insensitive substring match.
#[derive(Debug, Clone, Default)]
pub struct PetFilter {
    pub species: Option<String>,
    pub size: Option<String>,
    pub energy: Option<String>,
    pub location: Option<String>,
}

/// Fields accepted when a shelter lists a new pet.
#[derive(Debug, Clone)]
pub struct NewPet {
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
