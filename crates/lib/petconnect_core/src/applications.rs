//! Adoption application persistence queries.
//!
//! Every shelter-side query is predicated on `shelter_id = caller`, so a
//! shelter can neither see nor touch applications routed to another
//! shelter. The transition rules themselves live on
//! [`crate::models::application::ApplicationStatus`].

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{
    ApplicationRow, ApplicationStatus, ApplicationWithPet, NewApplication,
};
use crate::uuid::uuidv7;

/// Insert a new application. `shelter_id` is passed by the caller after
/// being read from the pet row — never from client input. Status and
/// submission time come from the database defaults.
pub async fn create_application(
    pool: &PgPool,
    app: NewApplication,
    shelter_id: Uuid,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (
            id, pet_id, applicant_id, applicant_name, applicant_email,
            applicant_phone, home_type, has_yard, has_pets, experience,
            reason, shelter_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(uuidv7())
    .bind(app.pet_id)
    .bind(app.applicant_id)
    .bind(app.applicant_name)
    .bind(app.applicant_email)
    .bind(app.applicant_phone)
    .bind(app.home_type)
    .bind(app.has_yard)
    .bind(app.has_pets)
    .bind(app.experience)
    .bind(app.reason)
    .bind(shelter_id)
    .fetch_one(pool)
    .await
}

/// List an adopter's own applications, newest first.
pub async fn list_for_applicant(
    pool: &PgPool,
    applicant_id: Uuid,
) -> Result<Vec<ApplicationWithPet>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationWithPet>(
        r#"
        SELECT a.*, p.name AS pet_name, p.image AS pet_image
        FROM applications a
        JOIN pets p ON p.id = a.pet_id
        WHERE a.applicant_id = $1
        ORDER BY a.submitted_date DESC
        "#,
    )
    .bind(applicant_id)
    .fetch_all(pool)
    .await
}

/// List all applications routed to a shelter, newest first.
pub async fn list_for_shelter(
    pool: &PgPool,
    shelter_id: Uuid,
) -> Result<Vec<ApplicationWithPet>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationWithPet>(
        r#"
        SELECT a.*, p.name AS pet_name, p.image AS pet_image
        FROM applications a
        JOIN pets p ON p.id = a.pet_id
        WHERE a.shelter_id = $1
        ORDER BY a.submitted_date DESC
        "#,
    )
    .bind(shelter_id)
    .fetch_all(pool)
    .await
}

/// Fetch an application scoped to its owning shelter. Returns `None` both
/// when the row is absent and when it belongs to another shelter.
pub async fn get_for_shelter(
    pool: &PgPool,
    application_id: Uuid,
    shelter_id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE id = $1 AND shelter_id = $2",
    )
    .bind(application_id)
    .bind(shelter_id)
    .fetch_optional(pool)
    .await
}

/// Persist a status change, again scoped to the owning shelter.
///
/// Compare-and-swap: the update only applies while the row still holds
/// `from`, so two racing updates cannot both move the same application
/// and a terminal status can never be overwritten. Returns `None` when
/// the row is absent, owned by another shelter, or no longer in `from`.
pub async fn set_status(
    pool: &PgPool,
    application_id: Uuid,
    shelter_id: Uuid,
    from: ApplicationStatus,
    to: ApplicationStatus,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "UPDATE applications SET status = $1 \
         WHERE id = $2 AND shelter_id = $3 AND status = $4 \
         RETURNING *",
    )
    .bind(to)
    .bind(application_id)
    .bind(shelter_id)
    .bind(from)
    .fetch_optional(pool)
    .await
}
