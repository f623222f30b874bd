use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinelog_core::patch::PatchError;
use cinelog_core::types::DbId;
use cinelog_core::validate::Violation;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// Lookup misses deliberately carry no body; everything else answers with
/// `{ "error": ..., "code": ... }` plus variant-specific fields.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Request payload failed field validation.
    #[error("validation failed")]
    Validation(Vec<Violation>),

    /// The record produced by a patch failed field validation.
    #[error("patched record failed validation")]
    Unprocessable(Vec<Violation>),

    /// A patch operation could not be applied.
    #[error(transparent)]
    Patch(#[from] PatchError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound { entity, id } => {
                tracing::debug!(entity = %entity, id = %id, "Lookup missed");
                StatusCode::NOT_FOUND.into_response()
            }

            AppError::Validation(violations) => {
                violation_response(StatusCode::BAD_REQUEST, violations)
            }
            AppError::Unprocessable(violations) => {
                violation_response(StatusCode::UNPROCESSABLE_ENTITY, violations)
            }

            AppError::Patch(err) => {
                let body = json!({
                    "error": err.to_string(),
                    "code": err.code(),
                    "op_index": err.op_index(),
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "STORAGE_ERROR",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

/// Build the shared body for validation failures.
///
/// The same shape serves 400 (bad input) and 422 (patch produced an
/// invalid record); only the status differs.
fn violation_response(status: StatusCode, violations: &[Violation]) -> Response {
    let body = json!({
        "error": "validation failed",
        "code": "VALIDATION_FAILED",
        "violations": violations,
    });
    (status, axum::Json(body)).into_response()
}
