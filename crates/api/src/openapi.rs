//! OpenAPI document assembly.
//!
//! Every handler carries a `#[utoipa::path]` annotation; this module gathers
//! them into one document and serves it as JSON. The document is built once
//! per request, which is cheap enough for an endpoint hit by tooling rather
//! than traffic.

use axum::Json;
use cinelog_core::patch::PatchOp;
use cinelog_core::validate::Violation;
use cinelog_db::models::movie::{CreateMovie, Movie, ReadMovie, UpdateMovie};
use utoipa::OpenApi;

use crate::handlers;
use crate::routes::health::{self, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cinelog",
        description = "A movie catalog with full and JSON-Patch partial updates."
    ),
    paths(
        handlers::movie::create,
        handlers::movie::list,
        handlers::movie::get_by_id,
        handlers::movie::update,
        handlers::movie::patch,
        handlers::movie::delete,
        health::health_check,
    ),
    components(schemas(
        Movie,
        CreateMovie,
        UpdateMovie,
        ReadMovie,
        PatchOp,
        Violation,
        HealthResponse,
    )),
    tags(
        (name = "movie", description = "Movie catalog CRUD"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
