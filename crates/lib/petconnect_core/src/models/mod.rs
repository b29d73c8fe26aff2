//! Domain models.

pub mod application;
pub mod pet;
pub mod user;
