pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movie          list, create
/// /movie/{id}     get, update (PUT), patch (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Movie catalog CRUD plus JSON-Patch partial updates.
        .nest("/movie", movie::router())
}
