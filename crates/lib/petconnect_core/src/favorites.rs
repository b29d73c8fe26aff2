//! Favorite (user, pet) associations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pet::PetRow;

/// List the pets a user has favorited.
pub async fn list_favorite_pets(pool: &PgPool, user_id: Uuid) -> Result<Vec<PetRow>, sqlx::Error> {
    sqlx::query_as::<_, PetRow>(
        r#"
        SELECT p.*
        FROM favorites f
        JOIN pets p ON p.id = f.pet_id
        WHERE f.user_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Add a favorite. Adding an already-favorited pet is a no-op success.
pub async fn add_favorite(pool: &PgPool, user_id: Uuid, pet_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO favorites (user_id, pet_id) VALUES ($1, $2) \
         ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(pet_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove a favorite. Removing an absent favorite is also a no-op.
pub async fn remove_favorite(
    pool: &PgPool,
    user_id: Uuid,
    pet_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND pet_id = $2")
        .bind(user_id)
        .bind(pet_id)
        .execute(pool)
        .await?;
    Ok(())
}
