//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Immutable after creation — there is no role-change path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Adopter,
    Shelter,
}

impl UserRole {
    /// Parse a client-supplied role. Anything other than the literal
    /// `"shelter"` (including absence) becomes adopter.
    pub fn from_request(value: Option<&str>) -> Self {
        match value {
            Some("shelter") => UserRole::Shelter,
            _ => UserRole::Adopter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Adopter => "adopter",
            UserRole::Shelter => "shelter",
        }
    }
}

/// Full user row, including credential material. Internal only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// `None` is the sentinel: the account has no local password and
    /// authenticates via Google OAuth only.
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Public projection — never exposes the password hash.
    pub fn public(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Public user projection returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: Uuid,
    /// User email.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
