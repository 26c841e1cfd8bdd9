//! Route definitions for the `/projects` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /                -> create
/// DELETE /{id}            -> delete (cascades to submissions)
/// GET    /slug/{slug}     -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(project::create))
        .route("/{id}", delete(project::delete))
        .route("/slug/{slug}", get(project::get_by_slug))
}
