//! Request handlers.

use uuid::Uuid;

use crate::error::ApiError;

pub mod applications;
pub mod auth;
pub mod favorites;
pub mod oauth;
pub mod pets;

/// `GET /` — plain-text liveness greeting.
pub async fn index() -> &'static str {
    "PetConnect backend is running"
}

/// Parse a path segment as a UUID. Handlers take `Path<String>` and call
/// this so a malformed id yields the JSON `{"message"}` error body
/// instead of the framework's plain-text rejection.
pub(crate) fn parse_id(value: &str, what: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value).map_err(|_| ApiError::Validation(format!("{what} must be a valid UUID")))
}
