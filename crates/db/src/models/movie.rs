//! Movie entity model and DTOs.
//!
//! Projections between the shapes are spelled out field by field; the only
//! dynamic representation is the patch staging map, whose keys mirror
//! [`cinelog_core::movie::FIELDS`].

use chrono::Utc;
use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    /// Runtime in minutes.
    pub duration: i32,
    #[schema(value_type = chrono::DateTime<chrono::Utc>)]
    pub created_at: Timestamp,
    #[schema(value_type = chrono::DateTime<chrono::Utc>)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie. Constraints match the `movies` table
/// CHECK clauses.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub genre: String,
    /// Runtime in minutes.
    #[validate(range(min = 70, max = 300, message = "must be between 70 and 300"))]
    pub duration: i32,
}

/// DTO for a full update; also the typed form of a patched staging record.
/// Same constraints as [`CreateMovie`].
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub genre: String,
    /// Runtime in minutes.
    #[validate(range(min = 70, max = 300, message = "must be between 70 and 300"))]
    pub duration: i32,
}

/// Read-only listing projection. `consulted_at` is stamped when the
/// projection is built and never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReadMovie {
    pub title: String,
    pub genre: String,
    /// Runtime in minutes.
    pub duration: i32,
    #[schema(value_type = chrono::DateTime<chrono::Utc>)]
    pub consulted_at: Timestamp,
}

impl Movie {
    /// Project the patchable fields into a staging map for the patch engine.
    pub fn to_patch_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("title".to_string(), Value::String(self.title.clone()));
        record.insert("genre".to_string(), Value::String(self.genre.clone()));
        record.insert("duration".to_string(), Value::from(self.duration));
        record
    }
}

impl UpdateMovie {
    /// Rebuild the typed DTO from a patched staging map.
    ///
    /// Entries that are absent or hold an unusable value fall back to the
    /// field's default; unknown keys are ignored. No validation happens
    /// here: the result still goes through the validation gate.
    pub fn from_patch_record(record: &Map<String, Value>) -> Self {
        Self {
            title: read_text(record, "title"),
            genre: read_text(record, "genre"),
            duration: read_integer(record, "duration"),
        }
    }
}

impl From<&Movie> for ReadMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            duration: movie.duration,
            consulted_at: Utc::now(),
        }
    }
}

fn read_text(record: &Map<String, Value>, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn read_integer(record: &Map<String, Value>, field: &str) -> i32 {
    record
        .get(field)
        .and_then(Value::as_i64)
        .and_then(|value| i32::try_from(value).ok())
        .unwrap_or_default()
}
