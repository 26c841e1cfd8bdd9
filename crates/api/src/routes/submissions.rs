//! Route definitions for the `/submissions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submission;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// POST   /                  -> create (intake, idempotent by slug)
/// GET    /{project_slug}    -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submission::create))
        .route("/{project_slug}", get(submission::list_by_project))
}
