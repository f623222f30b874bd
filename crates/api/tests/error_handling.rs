//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and body shape. They do NOT need an HTTP server -- they call
//! `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use cinelog_api::error::AppError;
use cinelog_core::patch::PatchError;
use cinelog_core::validate::Violation;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and raw body bytes.
async fn error_to_response(err: AppError) -> (StatusCode, Vec<u8>) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn violation(field: &str, message: &str) -> Violation {
    Violation {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Test: NotFound maps to 404 with an empty body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404_without_a_body() {
    let err = AppError::NotFound {
        entity: "Movie",
        id: 42,
    };

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty(), "404 responses must not carry a body");
}

// ---------------------------------------------------------------------------
// Test: Validation maps to 400 with the violation list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_failure_returns_400_with_violations() {
    let err = AppError::Validation(vec![
        violation("duration", "must be between 70 and 300"),
        violation("title", "must be between 1 and 100 characters"),
    ]);

    let (status, body) = error_to_response(err).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(json["violations"].as_array().unwrap().len(), 2);
    assert_eq!(json["violations"][0]["field"], "duration");
    assert_eq!(json["violations"][0]["message"], "must be between 70 and 300");
}

// ---------------------------------------------------------------------------
// Test: Unprocessable maps to 422 with the same body shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_patch_validation_failure_returns_422() {
    let err = AppError::Unprocessable(vec![violation("genre", "must be between 1 and 50 characters")]);

    let (status, body) = error_to_response(err).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(json["violations"][0]["field"], "genre");
}

// ---------------------------------------------------------------------------
// Test: PatchError maps to 400 with code and operation index
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_error_returns_400_with_code_and_index() {
    let err = AppError::Patch(PatchError::PathNotFound {
        index: 3,
        path: "/rating".into(),
    });

    let (status, body) = error_to_response(err).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "PATH_NOT_FOUND");
    assert_eq!(json["op_index"], 3);
    assert!(json["error"].as_str().unwrap().contains("/rating"));
}

// ---------------------------------------------------------------------------
// Test: Database errors map to 500 and sanitize the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_the_message() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, body) = error_to_response(err).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
