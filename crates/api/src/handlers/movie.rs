//! Handlers for the `/movie` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::movie::FIELDS;
use cinelog_core::patch::{self, PatchOp};
use cinelog_core::types::DbId;
use cinelog_core::validate::collect_violations;
use cinelog_db::models::movie::{CreateMovie, Movie, ReadMovie, UpdateMovie};
use cinelog_db::repositories::MovieRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/movie
///
/// Stores a new movie and answers with the created row plus a `Location`
/// header pointing at it.
#[utoipa::path(
    post,
    path = "/api/v1/movie",
    tag = "movie",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie,
         headers(("Location" = String, description = "URL of the created movie"))),
        (status = 400, description = "A field failed validation"),
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Movie>)> {
    input
        .validate()
        .map_err(|errors| AppError::Validation(collect_violations(&errors)))?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    let location = format!("/api/v1/movie/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(movie),
    ))
}

/// GET /api/v1/movie
///
/// Pages through movies in insertion order and answers with the read
/// projection, each entry stamped with the time of this lookup.
#[utoipa::path(
    get,
    path = "/api/v1/movie",
    tag = "movie",
    params(PaginationParams),
    responses(
        (status = 200, description = "A page of movies", body = [ReadMovie]),
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<ReadMovie>>> {
    let movies = MovieRepo::list(&state.pool, params.skip(), params.take()).await?;
    Ok(Json(movies.iter().map(ReadMovie::from).collect()))
}

/// GET /api/v1/movie/{id}
#[utoipa::path(
    get,
    path = "/api/v1/movie/{id}",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The requested movie", body = Movie),
        (status = 404, description = "No movie with this id"),
    ),
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "Movie", id })?;
    Ok(Json(movie))
}

/// PUT /api/v1/movie/{id}
///
/// Overwrites every mapped field. The payload is validated before the row
/// is looked up, so malformed input answers 400 even for ids that do not
/// exist.
#[utoipa::path(
    put,
    path = "/api/v1/movie/{id}",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie id")),
    request_body = UpdateMovie,
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "A field failed validation"),
        (status = 404, description = "No movie with this id"),
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    input
        .validate()
        .map_err(|errors| AppError::Validation(collect_violations(&errors)))?;
    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::NotFound { entity: "Movie", id })?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/movie/{id}
///
/// Applies a JSON-Patch-style operation batch to the stored movie. The
/// batch is all-or-nothing: a failing operation leaves the row untouched
/// and reports the zero-based index of the offender. A batch that applies
/// cleanly but produces an invalid record answers 422.
#[utoipa::path(
    patch,
    path = "/api/v1/movie/{id}",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie id")),
    request_body = Vec<PatchOp>,
    responses(
        (status = 204, description = "Movie patched"),
        (status = 400, description = "An operation could not be applied"),
        (status = 404, description = "No movie with this id"),
        (status = 422, description = "The patched movie failed validation"),
    ),
)]
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(ops): Json<Vec<PatchOp>>,
) -> AppResult<StatusCode> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound { entity: "Movie", id })?;

    let patched = patch::apply(&FIELDS, &movie.to_patch_record(), &ops)?;
    let input = UpdateMovie::from_patch_record(&patched);
    input
        .validate()
        .map_err(|errors| AppError::Unprocessable(collect_violations(&errors)))?;

    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::NotFound { entity: "Movie", id })?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movie/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/movie/{id}",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "No movie with this id"),
    ),
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound { entity: "Movie", id })
    }
}
