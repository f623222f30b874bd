//! Tests for the generated OpenAPI document.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn openapi_document_is_served_as_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["openapi"].is_string());
    assert_eq!(json["info"]["title"], "cinelog");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn openapi_document_lists_every_route(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api-docs/openapi.json").await).await;

    let paths = json["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/v1/movie"));
    assert!(paths.contains_key("/api/v1/movie/{id}"));
    assert!(paths.contains_key("/health"));

    let collection = paths["/api/v1/movie"].as_object().unwrap();
    assert!(collection.contains_key("get"));
    assert!(collection.contains_key("post"));

    let item = paths["/api/v1/movie/{id}"].as_object().unwrap();
    for method in ["get", "put", "patch", "delete"] {
        assert!(item.contains_key(method), "missing {method} on /movie/{{id}}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn openapi_document_carries_the_request_and_response_schemas(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api-docs/openapi.json").await).await;

    let schemas = json["components"]["schemas"].as_object().unwrap();
    for name in ["Movie", "CreateMovie", "UpdateMovie", "ReadMovie", "PatchOp"] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }
}
