//! Authentication middleware — Bearer token extraction and JWT
//! verification, plus the per-endpoint role predicate.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use petconnect_core::auth::jwt::verify_session_token;
use petconnect_core::models::user::{SessionClaims, UserRole};

use crate::AppState;
use crate::error::ApiError;

/// Verified caller identity stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub SessionClaims);

impl AuthenticatedUser {
    /// Role predicate applied after authentication. Endpoints restricted
    /// to one role call this before touching storage.
    pub fn require_role(&self, role: UserRole) -> Result<(), ApiError> {
        if self.0.role == role {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!(
                "Requires {} role",
                role.as_str()
            )))
        }
    }
}

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// JWT, and injects `AuthenticatedUser` into request extensions.
///
/// A missing header is 401; a malformed scheme, bad signature or expired
/// token is 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::InvalidToken)?;

    let claims = verify_session_token(token, state.config.jwt_secret.as_bytes())
        .ok_or(ApiError::InvalidToken)?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}
