//! Pet persistence queries.

use sqlx::types::Json;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::models::pet::{NewPet, PetFilter, PetRow};
use crate::uuid::uuidv7;

/// List pets, applying the optional public browse filters.
pub async fn list_pets(pool: &PgPool, filter: &PetFilter) -> Result<Vec<PetRow>, sqlx::Error> {
    let mut query = QueryBuilder::<sqlx::Postgres>::new("SELECT * FROM pets WHERE true");
    if let Some(species) = &filter.species {
        query.push(" AND species = ").push_bind(species.clone());
    }
    if let Some(size) = &filter.size {
        query.push(" AND size = ").push_bind(size.clone());
    }
    if let Some(energy) = &filter.energy {
        query.push(" AND energy = ").push_bind(energy.clone());
    }
    if let Some(location) = &filter.location {
        query
            .push(" AND location ILIKE ")
            .push_bind(format!("%{location}%"));
    }
    query.push(" ORDER BY created_at DESC");

    query.build_query_as::<PetRow>().fetch_all(pool).await
}

/// Get a pet by ID.
pub async fn get_pet(pool: &PgPool, pet_id: Uuid) -> Result<Option<PetRow>, sqlx::Error> {
    sqlx::query_as::<_, PetRow>("SELECT * FROM pets WHERE id = $1")
        .bind(pet_id)
        .fetch_optional(pool)
        .await
}

/// Create a pet listing owned by the given shelter.
pub async fn create_pet(
    pool: &PgPool,
    shelter_id: Uuid,
    pet: NewPet,
) -> Result<PetRow, sqlx::Error> {
    sqlx::query_as::<_, PetRow>(
        r#"
        INSERT INTO pets (
            id, shelter_id, name, species, breed, age, size, gender, color,
            energy, good_with_kids, good_with_pets, description, traits,
            location, shelter, image, images
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
        RETURNING *
        "#,
    )
    .bind(uuidv7())
    .bind(shelter_id)
    .bind(pet.name)
    .bind(pet.species)
    .bind(pet.breed)
    .bind(pet.age)
    .bind(pet.size)
    .bind(pet.gender)
    .bind(pet.color)
    .bind(pet.energy)
    .bind(pet.good_with_kids)
    .bind(pet.good_with_pets)
    .bind(pet.description)
    .bind(Json(pet.traits))
    .bind(pet.location)
    .bind(pet.shelter)
    .bind(pet.image)
    .bind(Json(pet.images))
    .fetch_one(pool)
    .await
}
