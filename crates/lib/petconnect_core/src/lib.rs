//! # petconnect_core
//!
//! Core domain logic for PetConnect: authentication, the adoption
//! application lifecycle, and persistence for pets and favorites.

pub mod applications;
pub mod auth;
pub mod db;
pub mod favorites;
pub mod migrate;
pub mod models;
pub mod pets;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
