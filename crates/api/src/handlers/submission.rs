//! Handlers for the `/submissions` resource: client intake and history.
//!
//! Intake runs a strict check ladder before writing anything:
//! validation, then idempotency, then submitter continuity, then the
//! project-wide file quota. A retried request short-circuits at the
//! idempotency step and never consumes quota a second time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use handover_core::error::CoreError;
use handover_core::intake::{self, FileCount, IntakeRequest, MAX_FILES_PER_PROJECT};
use handover_db::models::submission::{IntakeResponse, Submission};
use handover_db::repositories::{GuardedInsert, SubmissionRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/submissions
///
/// Accepts a claimed submission and returns 201 with a file-count
/// summary, or 200 with `duplicate: true` when the slug was already
/// processed. Exactly one row is ever inserted per unique slug.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<IntakeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<IntakeResponse>>)> {
    let draft = intake::validate_intake(input)?;

    // Idempotency: a previously seen slug is a retry of the same logical
    // event. Report the current accounting and stop before the
    // continuity and quota checks run.
    if let Some(existing) = SubmissionRepo::find_by_slug(&state.pool, &draft.slug).await? {
        let count = SubmissionRepo::count_files(&state.pool, &existing.project_slug).await?;

        tracing::info!(
            submission_id = existing.id,
            slug = %existing.slug,
            project_slug = %existing.project_slug,
            "Duplicate submission detected, returning existing record",
        );

        let response = IntakeResponse {
            id: existing.id,
            slug: existing.slug,
            duplicate: true,
            file_count: FileCount::replay(count),
        };
        return Ok((StatusCode::OK, Json(DataResponse { data: response })));
    }

    // Continuity: the project's submitter is pinned to the email of the
    // most recent submission. A brand-new project has no history and
    // skips the check.
    if let Some(latest) =
        SubmissionRepo::find_latest_by_project(&state.pool, &draft.project_slug).await?
    {
        intake::check_continuity(&latest.email, &draft.email)?;
    }

    // Quota check and insert run serialized per project inside the
    // repository, so concurrent intakes cannot overshoot the cap.
    match SubmissionRepo::insert_guarded(&state.pool, &draft, MAX_FILES_PER_PROJECT).await? {
        GuardedInsert::Inserted {
            submission,
            existing,
        } => {
            let file_count = intake::check_quota(existing, submission.file_count())?;

            tracing::info!(
                submission_id = submission.id,
                slug = %submission.slug,
                project_slug = %submission.project_slug,
                new_files = file_count.new,
                total_files = file_count.total,
                "Submission accepted",
            );

            let response = IntakeResponse {
                id: submission.id,
                slug: submission.slug,
                duplicate: false,
                file_count,
            };
            Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
        }
        GuardedInsert::QuotaExceeded { existing } => Err(CoreError::QuotaExceeded {
            max: MAX_FILES_PER_PROJECT,
            existing,
            remaining: MAX_FILES_PER_PROJECT - existing,
        }
        .into()),
    }
}

/// GET /api/v1/submissions/{project_slug}
///
/// Full submission history for a project, newest first.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Submission>>>> {
    let submissions = SubmissionRepo::list_by_project(&state.pool, &project_slug).await?;
    Ok(Json(DataResponse { data: submissions }))
}
