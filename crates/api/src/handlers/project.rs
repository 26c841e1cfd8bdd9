//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use handover_core::error::CoreError;
use handover_core::slug::generate_project_slug;
use handover_core::types::DbId;
use handover_db::models::project::{CreateProject, Project, ProjectCreatedResponse};
use handover_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// Creates a project with a server-generated public slug.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectCreatedResponse>>)> {
    let title = required(&input.title, "title")?;
    let name = required(&input.name, "name")?;
    let email = required(&input.email, "email")?;

    let slug = generate_project_slug();
    let project = ProjectRepo::create(
        &state.pool,
        &slug,
        title,
        name,
        email,
        input.owner_id.as_deref(),
    )
    .await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");

    let response = ProjectCreatedResponse {
        id: project.id,
        slug: project.slug,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// GET /api/v1/projects/slug/{slug}
///
/// Project lookup by public slug, used by the client-facing submit page.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                key: slug.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Deletes the project together with every submission grouped under its
/// slug. Submissions reference projects by slug string, so the cascade
/// is explicit.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete_cascade(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project and its submissions deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            key: id.to_string(),
        }))
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "Missing required field: {field}"
        )))),
    }
}
