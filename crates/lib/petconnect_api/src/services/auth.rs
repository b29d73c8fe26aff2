//! Credential verification — register, login, Google sign-in.
//!
//! Each flow ends the same way: a public user projection plus a fresh
//! 7-day session token signed with the configured secret.

use sqlx::PgPool;
use tracing::info;

use petconnect_core::auth::jwt::generate_session_token;
use petconnect_core::auth::password::{hash_password, verify_password};
use petconnect_core::auth::queries;
use petconnect_core::models::user::{UserRole, UserRow};

use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services::google::GoogleProfile;

/// Issue a session token for a user and build the `{user, token}` response.
fn issue_token(user: &UserRow, jwt_secret: &[u8]) -> ApiResult<AuthResponse> {
    let token =
        generate_session_token(user.id, &user.email, user.role, &user.name, jwt_secret)?;
    Ok(AuthResponse {
        user: user.public(),
        token,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Passwords are taken verbatim. Trimming would silently change a
/// credential that legitimately starts or ends with whitespace.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Register a new account with a local password.
pub async fn register(
    pool: &PgPool,
    body: &RegisterRequest,
    jwt_secret: &[u8],
) -> ApiResult<AuthResponse> {
    let (Some(name), Some(email), Some(password)) = (
        non_empty(body.name.as_deref()),
        non_empty(body.email.as_deref()),
        present(body.password.as_deref()),
    ) else {
        return Err(ApiError::Validation(
            "Name, email, and password are required".into(),
        ));
    };

    let role = UserRole::from_request(body.role.as_deref());

    if queries::email_exists(pool, email).await? {
        return Err(ApiError::EmailInUse);
    }

    let password_hash = hash_password(password)?;

    // Under a concurrent duplicate registration the unique constraint on
    // users.email still guarantees a single winner; the loser's insert
    // surfaces as EmailInUse via the sqlx conversion.
    let user = queries::create_user(pool, name, email, Some(&password_hash), role).await?;

    info!(email, role = role.as_str(), "user registered");
    issue_token(&user, jwt_secret)
}

/// Authenticate with email + password.
pub async fn login(
    pool: &PgPool,
    body: &LoginRequest,
    jwt_secret: &[u8],
) -> ApiResult<AuthResponse> {
    let (Some(email), Some(password)) = (
        non_empty(body.email.as_deref()),
        present(body.password.as_deref()),
    ) else {
        return Err(ApiError::Validation("Email and password are required".into()));
    };

    // Unknown email and wrong password produce the identical response.
    let user = queries::find_user_by_email(pool, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let Some(hash) = user.password_hash.as_deref() else {
        // OAuth-only account: distinguishable failure directing the caller
        // to Google sign-in.
        return Err(ApiError::WrongAuthMethod);
    };

    if !verify_password(password, hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    issue_token(&user, jwt_secret)
}

/// Sign in with a verified Google profile. Creates an adopter account on
/// first sign-in; never alters an existing account's role or credentials.
///
/// Returns the response plus whether a new account was created (201 vs 200).
pub async fn google_login(
    pool: &PgPool,
    profile: &GoogleProfile,
    jwt_secret: &[u8],
) -> ApiResult<(AuthResponse, bool)> {
    if let Some(user) = queries::find_user_by_email(pool, &profile.email).await? {
        return Ok((issue_token(&user, jwt_secret)?, false));
    }

    let user = queries::create_user(
        pool,
        &profile.name,
        &profile.email,
        None,
        UserRole::Adopter,
    )
    .await?;

    info!(email = %profile.email, "user created via google sign-in");
    Ok((issue_token(&user, jwt_secret)?, true))
}
