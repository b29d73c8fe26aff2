//! # petconnect_api
//!
//! HTTP API library for PetConnect.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{applications, auth, favorites, oauth, pets};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `petconnect_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    petconnect_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/", get(handlers::index))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/google", post(oauth::google_handler))
        .route("/api/pets", get(pets::list_pets_handler))
        .route("/api/pets/{id}", get(pets::get_pet_handler));

    // Protected routes (require a valid session token)
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me_handler))
        .route("/api/pets", post(pets::create_pet_handler))
        .route(
            "/api/applications",
            post(applications::submit_application_handler)
                .get(applications::list_applications_handler),
        )
        .route(
            "/api/applications/{id}/status",
            patch(applications::update_status_handler),
        )
        .route(
            "/api/favorites",
            get(favorites::list_favorites_handler).post(favorites::add_favorite_handler),
        )
        .route(
            "/api/favorites/{petId}",
            delete(favorites::remove_favorite_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
