//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` input DTOs for creates and updates
//! - Output projections built with explicit field copies

pub mod movie;

pub use movie::{CreateMovie, Movie, ReadMovie, UpdateMovie};
