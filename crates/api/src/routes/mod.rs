pub mod health;
pub mod projects;
pub mod submissions;

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                           create (POST)
/// /projects/{id}                      delete
/// /projects/slug/{slug}               get by public slug
///
/// /submissions                        intake (POST)
/// /submissions/{project_slug}         history (GET)
///
/// /download-all?projectSlug=...       zip archive of all project files
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/submissions", submissions::router())
        .route("/download-all", get(export::download_all))
}
